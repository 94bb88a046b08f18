//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task type.
    pub task_type: String,
    /// Scheduled date.
    pub scheduled_on: NaiveDate,
    /// Scheduled time of day.
    pub scheduled_at: NaiveTime,
    /// Referenced lead.
    pub lead_id: uuid::Uuid,
    /// Optional notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert and update model for task records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task type.
    pub task_type: String,
    /// Scheduled date.
    pub scheduled_on: NaiveDate,
    /// Scheduled time of day.
    pub scheduled_at: NaiveTime,
    /// Referenced lead.
    pub lead_id: uuid::Uuid,
    /// Optional notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
