//! Property aggregate root and listing details.

use super::{GeoPoint, ParsePropertyCategoryError, Price, PropertyDomainError, PropertyId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Kind of dwelling offered by a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCategory {
    /// Flat in a multi-unit building.
    Apartment,
    /// Detached or semi-detached house.
    House,
    /// Top-floor luxury unit.
    Penthouse,
}

impl PropertyCategory {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
            Self::Penthouse => "penthouse",
        }
    }
}

impl TryFrom<&str> for PropertyCategory {
    type Error = ParsePropertyCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "apartment" => Ok(Self::Apartment),
            "house" => Ok(Self::House),
            "penthouse" => Ok(Self::Penthouse),
            _ => Err(ParsePropertyCategoryError(value.to_owned())),
        }
    }
}

/// Postal address of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street and number.
    pub street: String,
    /// City name.
    pub city: String,
    /// State abbreviation.
    pub state: String,
    /// Postal code.
    pub zip_code: String,
}

/// Editable listing details shared by new and existing properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDetails {
    title: String,
    price: Price,
    category: PropertyCategory,
    bedrooms: u8,
    bathrooms: u8,
    area_sqm: u32,
    location: Option<GeoPoint>,
    description: String,
    image_url: String,
    amenities: Vec<String>,
    gallery: Vec<String>,
    address: Address,
}

impl PropertyDetails {
    /// Creates listing details with the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyDomainError::EmptyTitle`] when the title is blank.
    pub fn new(
        title: impl Into<String>,
        price: Price,
        category: PropertyCategory,
    ) -> Result<Self, PropertyDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PropertyDomainError::EmptyTitle);
        }
        Ok(Self {
            title: trimmed.to_owned(),
            price,
            category,
            bedrooms: 0,
            bathrooms: 0,
            area_sqm: 0,
            location: None,
            description: String::new(),
            image_url: String::new(),
            amenities: Vec::new(),
            gallery: Vec::new(),
            address: Address::default(),
        })
    }

    /// Sets bedroom and bathroom counts.
    #[must_use]
    pub const fn with_rooms(mut self, bedrooms: u8, bathrooms: u8) -> Self {
        self.bedrooms = bedrooms;
        self.bathrooms = bathrooms;
        self
    }

    /// Sets the floor area in square metres.
    #[must_use]
    pub const fn with_area(mut self, area_sqm: u32) -> Self {
        self.area_sqm = area_sqm;
        self
    }

    /// Sets map coordinates.
    #[must_use]
    pub const fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the cover image reference.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Sets the amenity list, dropping blank entries.
    #[must_use]
    pub fn with_amenities(mut self, amenities: impl IntoIterator<Item = String>) -> Self {
        self.amenities = amenities
            .into_iter()
            .map(|amenity| amenity.trim().to_owned())
            .filter(|amenity| !amenity.is_empty())
            .collect();
        self
    }

    /// Sets gallery image references.
    #[must_use]
    pub fn with_gallery(mut self, gallery: impl IntoIterator<Item = String>) -> Self {
        self.gallery = gallery.into_iter().collect();
        self
    }

    /// Sets the postal address.
    #[must_use]
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    /// Returns the listing title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the asking price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the listing category.
    #[must_use]
    pub const fn category(&self) -> PropertyCategory {
        self.category
    }

    /// Returns the bedroom count.
    #[must_use]
    pub const fn bedrooms(&self) -> u8 {
        self.bedrooms
    }

    /// Returns the bathroom count.
    #[must_use]
    pub const fn bathrooms(&self) -> u8 {
        self.bathrooms
    }

    /// Returns the floor area in square metres.
    #[must_use]
    pub const fn area_sqm(&self) -> u32 {
        self.area_sqm
    }

    /// Returns map coordinates, if known.
    #[must_use]
    pub const fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the cover image reference.
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Returns the amenities.
    #[must_use]
    pub fn amenities(&self) -> &[String] {
        &self.amenities
    }

    /// Returns gallery image references.
    #[must_use]
    pub fn gallery(&self) -> &[String] {
        &self.gallery
    }

    /// Returns the postal address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }
}

/// Property aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    id: PropertyId,
    details: PropertyDetails,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted property.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedPropertyData {
    /// Persisted identifier.
    pub id: PropertyId,
    /// Persisted listing details.
    pub details: PropertyDetails,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Creates a new property from listing details.
    #[must_use]
    pub fn new(details: PropertyDetails, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: PropertyId::new(),
            details,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a property from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedPropertyData) -> Self {
        Self {
            id: data.id,
            details: data.details,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the property identifier.
    #[must_use]
    pub const fn id(&self) -> PropertyId {
        self.id
    }

    /// Returns the listing details.
    #[must_use]
    pub const fn details(&self) -> &PropertyDetails {
        &self.details
    }

    /// Returns the listing title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.details.title()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the listing details, keeping identity and creation time.
    pub fn revise(&mut self, details: PropertyDetails, clock: &impl Clock) {
        self.details = details;
        self.updated_at = clock.utc();
    }
}
