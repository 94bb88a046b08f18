//! Facts about a lead that a follow-up email may mention.

use crate::labels::UNKNOWN_PROPERTY;
use crate::lead::domain::Lead;
use crate::property::domain::Property;
use serde::Serialize;

/// Template context for follow-up emails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowUpContext {
    /// Lead name.
    pub name: String,
    /// Title of the property of interest.
    pub property_title: String,
    /// Property category label.
    pub property_category: String,
    /// Formatted asking price.
    pub price: String,
    /// Bedroom count.
    pub bedrooms: u8,
    /// Bathroom count.
    pub bathrooms: u8,
    /// Area in square metres.
    pub area: u32,
    /// What the client is looking for.
    pub client_needs: String,
    /// Last contact date, ISO formatted.
    pub last_contact: String,
}

impl FollowUpContext {
    /// Collects the context for `lead` and its property of interest.
    ///
    /// A missing property yields placeholder values rather than an error.
    #[must_use]
    pub fn new(lead: &Lead, property: Option<&Property>) -> Self {
        let (property_title, property_category, price, bedrooms, bathrooms, area) = property
            .map_or_else(
                || (UNKNOWN_PROPERTY.to_owned(), String::new(), String::new(), 0, 0, 0),
                |property| {
                    let details = property.details();
                    (
                        details.title().to_owned(),
                        details.category().as_str().to_owned(),
                        details.price().to_brl(),
                        details.bedrooms(),
                        details.bathrooms(),
                        details.area_sqm(),
                    )
                },
            );
        Self {
            name: lead.name().to_owned(),
            property_title,
            property_category,
            price,
            bedrooms,
            bathrooms,
            area,
            client_needs: lead.client_needs().to_owned(),
            last_contact: lead.last_contact().format("%Y-%m-%d").to_string(),
        }
    }
}
