//! Then steps for lead lifecycle BDD scenarios.

use super::world::{LeadLifecycleWorld, run_async};
use eyre::WrapErr;
use realtyflow::lead::domain::{Lead, PipelineStatus};
use realtyflow::lifecycle::LifecycleError;
use rstest_bdd_macros::then;

fn stored_lead(world: &LeadLifecycleWorld, name: &str) -> Result<Lead, eyre::Report> {
    let id = world.lead(name)?.id();
    run_async(world.coordinator.leads().find(id))
        .wrap_err("look up lead")?
        .ok_or_else(|| eyre::eyre!("lead {name} is no longer stored"))
}

#[then(r#""{name}" is in the "{status}" stage"#)]
fn lead_in_stage(
    world: &LeadLifecycleWorld,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = PipelineStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid stage in scenario: {err}"))?;
    let lead = stored_lead(world, &name)?;
    eyre::ensure!(
        lead.status() == expected,
        "expected {name} in {}, found {}",
        expected.as_str(),
        lead.status().as_str()
    );
    Ok(())
}

#[then(r#""{name}" was last contacted today"#)]
fn lead_contacted_today(world: &LeadLifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let lead = stored_lead(world, &name)?;
    eyre::ensure!(
        lead.last_contact() == world.clock.today(),
        "expected last contact {}, found {}",
        world.clock.today(),
        lead.last_contact()
    );
    Ok(())
}

#[then(r#""{name}" is interested in "{title}""#)]
fn lead_interested_in(
    world: &LeadLifecycleWorld,
    name: String,
    title: String,
) -> Result<(), eyre::Report> {
    let property = world
        .properties
        .get(&title)
        .ok_or_else(|| eyre::eyre!("no property titled {title} in scenario world"))?;
    let lead = stored_lead(world, &name)?;
    eyre::ensure!(
        lead.property_of_interest() == Some(property.id()),
        "expected {name} to be interested in {title}"
    );
    Ok(())
}

#[then("the pipeline has {count:usize} columns")]
fn pipeline_has_columns(world: &LeadLifecycleWorld, count: usize) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.pipeline.len() == count,
        "expected {count} columns, found {}",
        world.pipeline.len()
    );
    Ok(())
}

#[then(r#"the "{status}" column holds {count:usize} leads"#)]
fn column_holds(
    world: &LeadLifecycleWorld,
    status: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let (_, held) = world
        .pipeline
        .iter()
        .find(|(key, _)| *key == status)
        .ok_or_else(|| eyre::eyre!("no {status} column"))?;
    eyre::ensure!(*held == count, "expected {count} leads in {status}, found {held}");
    Ok(())
}

#[then("the task is rejected for an unknown lead")]
fn rejected_for_unknown_lead(world: &LeadLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_save
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing save result"))?;
    eyre::ensure!(
        matches!(result, Err(LifecycleError::UnknownLead(_))),
        "expected UnknownLead error, got {result:?}"
    );
    Ok(())
}

#[then("no tasks are stored")]
fn no_tasks_stored(world: &LeadLifecycleWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.coordinator.tasks().list()).wrap_err("list tasks")?;
    eyre::ensure!(tasks.is_empty(), "expected no tasks, found {}", tasks.len());
    Ok(())
}

#[then("the task list holds {count:usize} tasks")]
fn task_list_holds(world: &LeadLifecycleWorld, count: usize) -> Result<(), eyre::Report> {
    if let Some(Err(err)) = &world.last_save {
        return Err(eyre::eyre!("last save failed: {err}"));
    }
    let tasks = run_async(world.coordinator.tasks().list()).wrap_err("list tasks")?;
    eyre::ensure!(
        tasks.len() == count,
        "expected {count} tasks, found {}",
        tasks.len()
    );
    Ok(())
}
