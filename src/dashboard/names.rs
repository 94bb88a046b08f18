//! Display-name lookups that tolerate dangling references.

use crate::labels::{UNKNOWN_LEAD, UNKNOWN_PROPERTY};
use crate::lead::domain::{Lead, LeadId};
use crate::property::domain::{Property, PropertyId};

/// Returns the lead's name, or a placeholder when it no longer exists.
#[must_use]
pub fn lead_display_name(leads: &[Lead], id: LeadId) -> &str {
    leads
        .iter()
        .find(|lead| lead.id() == id)
        .map_or(UNKNOWN_LEAD, Lead::name)
}

/// Returns the property's title, or a placeholder when it is unset or no
/// longer exists.
#[must_use]
pub fn property_display_name(properties: &[Property], id: Option<PropertyId>) -> &str {
    id.and_then(|wanted| properties.iter().find(|property| property.id() == wanted))
        .map_or(UNKNOWN_PROPERTY, Property::title)
}
