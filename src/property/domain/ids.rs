//! Identifier and validated scalar types for the property catalog.

use super::PropertyDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a property record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(Uuid);

impl PropertyId {
    /// Creates a new random property identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a property identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for PropertyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Asking price in whole currency units. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Price(u64);

impl Price {
    /// Creates a validated price.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyDomainError::NonPositivePrice`] when the value is
    /// zero.
    pub const fn new(value: u64) -> Result<Self, PropertyDomainError> {
        if value == 0 {
            return Err(PropertyDomainError::NonPositivePrice);
        }
        Ok(Self(value))
    }

    /// Returns the amount in whole currency units.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Formats the price the way the Brazilian dashboard shows it, for
    /// example `R$ 480.000`.
    #[must_use]
    pub fn to_brl(self) -> String {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + 8);
        for (position, ch) in digits.chars().enumerate() {
            let remaining = digits.len() - position;
            if position > 0 && remaining.is_multiple_of(3) {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        format!("R$ {grouped}")
    }
}

impl TryFrom<u64> for Price {
    type Error = PropertyDomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for u64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geographic coordinates of a property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates validated coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyDomainError::InvalidCoordinates`] when latitude is
    /// outside `[-90, 90]`, longitude is outside `[-180, 180]`, or either
    /// value is not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, PropertyDomainError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !valid {
            return Err(PropertyDomainError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Returns the latitude in degrees.
    #[must_use]
    pub const fn latitude(self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    #[must_use]
    pub const fn longitude(self) -> f64 {
        self.longitude
    }
}
