//! Diesel row models for lead persistence.

use super::schema::leads;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for lead records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = leads)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LeadRow {
    /// Lead identifier.
    pub id: uuid::Uuid,
    /// Contact name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Pipeline status.
    pub status: String,
    /// Last-contact date.
    pub last_contact: NaiveDate,
    /// Optional property of interest.
    pub property_of_interest_id: Option<uuid::Uuid>,
    /// Client-needs narrative.
    pub client_needs: String,
    /// Optional acquisition source.
    pub source: Option<String>,
    /// Optional responsible agent.
    pub agent: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert and update model for lead records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = leads)]
#[diesel(treat_none_as_null = true)]
pub struct NewLeadRow {
    /// Lead identifier.
    pub id: uuid::Uuid,
    /// Contact name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Pipeline status.
    pub status: String,
    /// Last-contact date.
    pub last_contact: NaiveDate,
    /// Optional property of interest.
    pub property_of_interest_id: Option<uuid::Uuid>,
    /// Client-needs narrative.
    pub client_needs: String,
    /// Optional acquisition source.
    pub source: Option<String>,
    /// Optional responsible agent.
    pub agent: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
