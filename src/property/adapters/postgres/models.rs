//! Diesel row models for property persistence.

use super::schema::properties;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for property records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = properties)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PropertyRow {
    /// Property identifier.
    pub id: uuid::Uuid,
    /// Listing title.
    pub title: String,
    /// Asking price.
    pub price: i64,
    /// Listing category.
    pub category: String,
    /// Cover image reference.
    pub image_url: String,
    /// Bedroom count.
    pub bedrooms: i16,
    /// Bathroom count.
    pub bathrooms: i16,
    /// Floor area.
    pub area_sqm: i32,
    /// Optional latitude.
    pub latitude: Option<f64>,
    /// Optional longitude.
    pub longitude: Option<f64>,
    /// Description.
    pub description: String,
    /// Amenities.
    pub amenities: Vec<String>,
    /// Gallery references.
    pub gallery: Vec<String>,
    /// Address JSON payload.
    pub address: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert and update model for property records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = properties)]
#[diesel(treat_none_as_null = true)]
pub struct NewPropertyRow {
    /// Property identifier.
    pub id: uuid::Uuid,
    /// Listing title.
    pub title: String,
    /// Asking price.
    pub price: i64,
    /// Listing category.
    pub category: String,
    /// Cover image reference.
    pub image_url: String,
    /// Bedroom count.
    pub bedrooms: i16,
    /// Bathroom count.
    pub bathrooms: i16,
    /// Floor area.
    pub area_sqm: i32,
    /// Optional latitude.
    pub latitude: Option<f64>,
    /// Optional longitude.
    pub longitude: Option<f64>,
    /// Description.
    pub description: String,
    /// Amenities.
    pub amenities: Vec<String>,
    /// Gallery references.
    pub gallery: Vec<String>,
    /// Address JSON payload.
    pub address: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
