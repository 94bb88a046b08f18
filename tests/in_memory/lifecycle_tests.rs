//! Scheduling and deletion across properties, leads and tasks.

use super::helpers::{Crm, crm};
use crate::test_helpers::date;
use chrono::NaiveTime;
use realtyflow::dashboard::{lead_display_name, property_display_name};
use realtyflow::labels::{UNKNOWN_LEAD, UNKNOWN_PROPERTY};
use realtyflow::lead::{domain::PipelineStatus, ports::LeadRepository};
use realtyflow::lifecycle::{LifecycleError, PendingDeletion, VisitStatusPolicy};
use realtyflow::task::{
    domain::{TaskDraft, TaskType},
    ports::TaskRepository,
};
use rstest::rstest;

fn at(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).expect("valid time")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn new_lead_is_matched_to_the_only_listing(crm: Crm) {
    let listing = crm.list_property("Casa no Lago", 1_250_000).await;

    let carlos = crm.add_lead("Carlos").await;

    assert_eq!(carlos.status(), PipelineStatus::New);
    assert_eq!(carlos.property_of_interest(), Some(listing.id()));
    assert_eq!(carlos.last_contact(), crm.clock.today());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn scheduling_then_editing_a_visit_keeps_one_task(crm: Crm) {
    let carlos = crm.add_lead("Carlos").await;
    let draft = TaskDraft::new(TaskType::Visit)
        .on(date(2026, 4, 20))
        .at(at(10))
        .for_lead(carlos.id());

    let scheduled = crm.coordinator.save_task(draft).await.expect("schedule");
    let moved = crm
        .coordinator
        .save_task(
            TaskDraft::editing(&scheduled)
                .on(date(2026, 4, 22))
                .with_notes("Levar chaves"),
        )
        .await
        .expect("reschedule");

    let stored = crm.tasks.list().await.expect("list tasks");
    assert_eq!(stored, vec![moved.clone()]);
    assert_eq!(moved.id(), scheduled.id());
    assert_eq!(moved.notes(), Some("Levar chaves"));
    let lead = crm
        .leads
        .find_by_id(carlos.id())
        .await
        .expect("lookup")
        .expect("lead exists");
    assert_eq!(lead.status(), PipelineStatus::VisitScheduled);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn advance_only_policy_never_moves_a_lead_backwards() {
    let crm = Crm::on(date(2026, 4, 15), VisitStatusPolicy::AdvanceOnly);
    let carlos = crm.add_lead("Carlos").await;
    crm.coordinator
        .leads()
        .set_status(carlos.id(), PipelineStatus::Proposal)
        .await
        .expect("advance")
        .expect("lead exists");

    crm.coordinator
        .save_task(
            TaskDraft::new(TaskType::Visit)
                .on(date(2026, 4, 16))
                .at(at(9))
                .for_lead(carlos.id()),
        )
        .await
        .expect("schedule");

    let lead = crm
        .leads
        .find_by_id(carlos.id())
        .await
        .expect("lookup")
        .expect("lead exists");
    assert_eq!(lead.status(), PipelineStatus::Proposal);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_lead_orphans_its_tasks(crm: Crm) {
    let carlos = crm.add_lead("Carlos").await;
    let call = crm
        .coordinator
        .save_task(
            TaskDraft::new(TaskType::Call)
                .on(date(2026, 4, 15))
                .at(at(14))
                .for_lead(carlos.id()),
        )
        .await
        .expect("schedule call");

    let removed = crm
        .coordinator
        .confirm_deletion(PendingDeletion::lead(&carlos))
        .await
        .expect("delete lead");

    assert!(removed);
    let tasks = crm.tasks.list().await.expect("list tasks");
    assert_eq!(tasks, vec![call.clone()]);
    let leads = crm.leads.list().await.expect("list leads");
    assert_eq!(lead_display_name(&leads, call.lead_id()), UNKNOWN_LEAD);

    let retry = crm
        .coordinator
        .save_task(TaskDraft::editing(&call).at(at(16)))
        .await;
    assert!(matches!(retry, Err(LifecycleError::UnknownLead(id)) if id == carlos.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_property_leaves_interested_leads(crm: Crm) {
    let listing = crm.list_property("Cobertura", 2_000_000).await;
    let ana = crm.add_lead("Ana").await;

    assert!(
        crm.coordinator
            .confirm_deletion(PendingDeletion::property(&listing))
            .await
            .expect("delete property")
    );
    assert!(
        !crm.coordinator
            .confirm_deletion(PendingDeletion::property(&listing))
            .await
            .expect("second delete")
    );

    let lead = crm
        .leads
        .find_by_id(ana.id())
        .await
        .expect("lookup")
        .expect("lead kept");
    assert_eq!(lead.property_of_interest(), Some(listing.id()));
    let catalog = crm.coordinator.properties().list().await.expect("catalog");
    assert_eq!(
        property_display_name(&catalog, lead.property_of_interest()),
        UNKNOWN_PROPERTY
    );
}
