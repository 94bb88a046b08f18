//! Agenda and calendar views over tasks.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::task::domain::Task;

/// Returns the tasks scheduled on `day`, earliest first.
#[must_use]
pub fn tasks_on(tasks: &[Task], day: NaiveDate) -> Vec<&Task> {
    let mut selected: Vec<&Task> = tasks.iter().filter(|task| task.is_on(day)).collect();
    selected.sort_by_key(|task| task.time());
    selected
}

/// Returns today's tasks, earliest first.
#[must_use]
pub fn todays_agenda(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
    tasks_on(tasks, today)
}

/// Groups the tasks of one calendar month by day, each day earliest first.
///
/// Days without tasks are absent.
#[must_use]
pub fn month_calendar(tasks: &[Task], year: i32, month: u32) -> BTreeMap<NaiveDate, Vec<&Task>> {
    let mut days: BTreeMap<NaiveDate, Vec<&Task>> = BTreeMap::new();
    for task in tasks
        .iter()
        .filter(|task| task.date().year() == year && task.date().month() == month)
    {
        days.entry(task.date()).or_default().push(task);
    }
    for day in days.values_mut() {
        day.sort_by_key(|task| task.time());
    }
    days
}
