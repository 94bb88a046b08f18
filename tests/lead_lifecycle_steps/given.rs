//! Given steps for lead lifecycle BDD scenarios.

use super::world::{LeadLifecycleWorld, run_async};
use eyre::WrapErr;
use realtyflow::lead::domain::{NewLead, PipelineStatus};
use realtyflow::lifecycle::PendingDeletion;
use realtyflow::property::domain::{Price, PropertyCategory, PropertyDetails};
use rstest_bdd_macros::given;

#[given(r#"the catalog lists "{title}""#)]
fn catalog_lists(world: &mut LeadLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let details = PropertyDetails::new(
        title.as_str(),
        Price::new(1_250_000).wrap_err("listing price")?,
        PropertyCategory::House,
    )
    .wrap_err("listing details")?;
    let property = run_async(world.coordinator.properties().add(details))
        .wrap_err("list property in scenario setup")?;
    world.properties.insert(title, property);
    Ok(())
}

#[given(r#"a new lead named "{name}""#)]
fn new_lead(world: &mut LeadLifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let request = NewLead::new(name.as_str(), format!("{}@example.com", name.to_lowercase()))
        .wrap_err("lead request")?;
    let lead = run_async(world.coordinator.leads().add(request))
        .wrap_err("add lead in scenario setup")?;
    world.leads.insert(name, lead);
    Ok(())
}

#[given(r#""{name}" has moved to the "{status}" stage"#)]
fn lead_moved(
    world: &mut LeadLifecycleWorld,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    let status = PipelineStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid stage in scenario: {err}"))?;
    let id = world.lead(&name)?.id();
    let moved = run_async(world.coordinator.leads().set_status(id, status))
        .wrap_err("move lead in scenario setup")?
        .ok_or_else(|| eyre::eyre!("lead {name} vanished"))?;
    world.leads.insert(name, moved);
    Ok(())
}

#[given(r#""{name}" has been deleted"#)]
fn lead_deleted(world: &mut LeadLifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let pending = PendingDeletion::lead(world.lead(&name)?);
    let removed = run_async(world.coordinator.confirm_deletion(pending))
        .wrap_err("delete lead in scenario setup")?;
    eyre::ensure!(removed, "lead {name} was not stored");
    Ok(())
}
