//! Unit tests for dashboard aggregates.


use crate::lead::domain::{Lead, LeadId, NewLead, PipelineStatus};
use crate::task::domain::{Task, TaskDraft, TaskType};
use crate::test_support::FixedClock;
use chrono::{NaiveDate, NaiveTime};

fn lead(name: &str, status: PipelineStatus, contacted: NaiveDate) -> Lead {
    let request = NewLead::new(name, format!("{name}@example.com")).expect("valid lead");
    Lead::create(request, None, &FixedClock::on(contacted)).with_status(status)
}

fn task(task_type: TaskType, lead_id: LeadId, day: NaiveDate, hour: u32) -> Task {
    let draft = TaskDraft::new(task_type)
        .on(day)
        .at(NaiveTime::from_hms_opt(hour, 0, 0).expect("valid time"))
        .for_lead(lead_id);
    Task::create(draft.validate().expect("complete draft"), &FixedClock::on(day))
}
