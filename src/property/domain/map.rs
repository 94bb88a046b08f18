//! Map marker projection for the property catalog.

use super::{GeoPoint, Price, Property, PropertyId};

/// A pin on the property map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    /// Property shown by the marker.
    pub property_id: PropertyId,
    /// Listing title for the info window.
    pub title: String,
    /// Asking price for the info window.
    pub price: Price,
    /// Marker position.
    pub position: GeoPoint,
}

/// Builds one marker per property that has coordinates.
///
/// Properties without coordinates are skipped silently.
#[must_use]
pub fn map_markers(properties: &[Property]) -> Vec<MapMarker> {
    properties
        .iter()
        .filter_map(|property| {
            let position = property.details().location()?;
            Some(MapMarker {
                property_id: property.id(),
                title: property.title().to_owned(),
                price: property.details().price(),
                position,
            })
        })
        .collect()
}
