//! Diesel schema for task persistence.

diesel::table! {
    /// Scheduled task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task type.
        #[max_length = 50]
        task_type -> Varchar,
        /// Scheduled date.
        scheduled_on -> Date,
        /// Scheduled time of day.
        scheduled_at -> Time,
        /// Referenced lead. Not a foreign key: lead deletion does not
        /// cascade to tasks.
        lead_id -> Uuid,
        /// Optional notes.
        notes -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
