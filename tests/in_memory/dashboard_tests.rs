//! Dashboard aggregates over a loaded snapshot.

use super::helpers::{Crm, crm};
use crate::test_helpers::date;
use chrono::NaiveTime;
use realtyflow::assist::FollowUpEmailService;
use realtyflow::config::CrmConfig;
use realtyflow::dashboard::{
    DashboardStats, StatCardId, TrendDirection, lead_attention, pipeline_columns, stat_cards,
    todays_agenda,
};
use realtyflow::lead::domain::PipelineStatus;
use realtyflow::settings::domain::default_stat_cards;
use realtyflow::task::domain::{TaskDraft, TaskType};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn todays_visit_shows_on_cards_pipeline_and_agenda(crm: Crm) {
    let today = crm.clock.today();
    let carlos = crm.add_lead("Carlos").await;
    let ana = crm.add_lead("Ana").await;
    crm.coordinator
        .save_task(
            TaskDraft::new(TaskType::Visit)
                .on(today)
                .at(NaiveTime::from_hms_opt(15, 30, 0).expect("valid time"))
                .for_lead(carlos.id()),
        )
        .await
        .expect("schedule visit");
    crm.coordinator
        .save_task(
            TaskDraft::new(TaskType::Call)
                .on(today)
                .at(NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"))
                .for_lead(ana.id()),
        )
        .await
        .expect("schedule call");

    let snapshot = crm.sync().load().await.expect("load snapshot");
    let stats = DashboardStats::compute(snapshot.leads(), snapshot.tasks(), today);
    let config = CrmConfig::default();
    let cards = stat_cards(&default_stat_cards(), &stats, &config.prior_period);

    assert_eq!(stats.new_leads, 1);
    assert_eq!(stats.visits_today, 1);
    assert_eq!(stats.follow_ups, 1);
    let visits = cards
        .iter()
        .find(|card| card.id == StatCardId::VisitsToday)
        .expect("visits card");
    assert_eq!(visits.display, "1");
    assert_eq!(visits.trend.direction, TrendDirection::Neutral);

    let columns = pipeline_columns(snapshot.leads());
    let scheduled = columns
        .iter()
        .find(|column| column.status == PipelineStatus::VisitScheduled)
        .expect("visit column");
    assert_eq!(scheduled.count(), 1);

    let agenda: Vec<TaskType> = todays_agenda(snapshot.tasks(), today)
        .into_iter()
        .map(|task| task.task_type())
        .collect();
    assert_eq!(agenda, vec![TaskType::Call, TaskType::Visit]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stale_lead_is_flagged_a_week_later(crm: Crm) {
    let carlos = crm.add_lead("Carlos").await;
    let config = CrmConfig::default();

    let snapshot = crm.sync().load().await.expect("load snapshot");
    let lead = snapshot.leads().first().expect("one lead");

    assert_eq!(lead.id(), carlos.id());
    assert_eq!(
        lead_attention(lead, snapshot.tasks(), date(2026, 4, 22), config.follow_up_after_days),
        None
    );
    assert!(
        lead_attention(lead, snapshot.tasks(), date(2026, 4, 23), config.follow_up_after_days)
            .is_some()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn follow_up_email_uses_the_assigned_listing(crm: Crm) {
    let listing = crm.list_property("Casa no Lago", 1_250_000).await;
    let carlos = crm.add_lead("Carlos").await;

    let email = FollowUpEmailService::template_only()
        .generate(&carlos, Some(&listing))
        .await;

    assert!(email.starts_with("Olá Carlos"));
    assert!(email.contains("Casa no Lago"));
    assert!(email.contains("3 quartos"));
}
