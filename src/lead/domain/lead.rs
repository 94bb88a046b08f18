//! Lead aggregate root and creation request.

use super::{LeadDomainError, LeadId, PipelineStatus};
use crate::property::domain::PropertyId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Acquisition source recorded on leads received from the ad integration.
pub const INTEGRATION_SOURCE: &str = "Meta Ads";

/// Agent recorded on leads nobody has picked up yet.
pub const UNASSIGNED_AGENT: &str = "Não Atribuído";

/// Validated input for adding a lead.
///
/// Status and last-contact date are not part of the request: new leads
/// always start as [`PipelineStatus::New`] contacted today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    name: String,
    email: String,
    phone: String,
    client_needs: String,
    source: Option<String>,
    agent: Option<String>,
    property_of_interest: Option<PropertyId>,
}

impl NewLead {
    /// Creates a request with the required contact fields.
    ///
    /// # Errors
    ///
    /// Returns [`LeadDomainError::EmptyName`] or
    /// [`LeadDomainError::EmptyEmail`] when a required field is blank.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, LeadDomainError> {
        Ok(Self {
            name: required(name.into(), LeadDomainError::EmptyName)?,
            email: required(email.into(), LeadDomainError::EmptyEmail)?,
            phone: String::new(),
            client_needs: String::new(),
            source: None,
            agent: None,
            property_of_interest: None,
        })
    }

    /// Builds the sample lead the ad integration delivers when a connection
    /// is tested.
    ///
    /// The email embeds `received_at` in milliseconds so repeated tests
    /// produce distinguishable leads.
    #[must_use]
    pub fn integration_sample(received_at: DateTime<Utc>) -> Self {
        Self {
            name: "Lead de Teste (Meta Ads)".to_owned(),
            email: format!("meta.lead.{}@example.com", received_at.timestamp_millis()),
            phone: "(41) 91234-5678".to_owned(),
            client_needs: "Interessado em imóveis anunciados no Facebook.".to_owned(),
            source: Some(INTEGRATION_SOURCE.to_owned()),
            agent: Some(UNASSIGNED_AGENT.to_owned()),
            property_of_interest: None,
        }
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the client-needs narrative.
    #[must_use]
    pub fn with_client_needs(mut self, client_needs: impl Into<String>) -> Self {
        self.client_needs = client_needs.into();
        self
    }

    /// Sets the acquisition source used by reports.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = optional(source.into());
        self
    }

    /// Sets the responsible agent used by reports.
    #[must_use]
    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = optional(agent.into());
        self
    }

    /// Designates the property of interest explicitly, bypassing the
    /// default assignment policy.
    #[must_use]
    pub const fn with_property_of_interest(mut self, property_id: PropertyId) -> Self {
        self.property_of_interest = Some(property_id);
        self
    }

    /// Returns the explicitly designated property, if any.
    #[must_use]
    pub const fn property_of_interest(&self) -> Option<PropertyId> {
        self.property_of_interest
    }
}

/// Lead aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    id: LeadId,
    name: String,
    phone: String,
    email: String,
    status: PipelineStatus,
    last_contact: NaiveDate,
    property_of_interest: Option<PropertyId>,
    client_needs: String,
    source: Option<String>,
    agent: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedLeadData {
    /// Persisted identifier.
    pub id: LeadId,
    /// Persisted name.
    pub name: String,
    /// Persisted phone number.
    pub phone: String,
    /// Persisted email.
    pub email: String,
    /// Persisted pipeline status.
    pub status: PipelineStatus,
    /// Persisted last-contact date.
    pub last_contact: NaiveDate,
    /// Persisted property reference.
    pub property_of_interest: Option<PropertyId>,
    /// Persisted client needs.
    pub client_needs: String,
    /// Persisted acquisition source.
    pub source: Option<String>,
    /// Persisted responsible agent.
    pub agent: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Lead {
    /// Creates a new lead in the [`PipelineStatus::New`] stage, contacted
    /// on the clock's current UTC date.
    #[must_use]
    pub fn create(
        request: NewLead,
        property_of_interest: Option<PropertyId>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: LeadId::new(),
            name: request.name,
            phone: request.phone,
            email: request.email,
            status: PipelineStatus::New,
            last_contact: timestamp.date_naive(),
            property_of_interest,
            client_needs: request.client_needs,
            source: request.source,
            agent: request.agent,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a lead from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedLeadData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            phone: data.phone,
            email: data.email,
            status: data.status,
            last_contact: data.last_contact,
            property_of_interest: data.property_of_interest,
            client_needs: data.client_needs,
            source: data.source,
            agent: data.agent,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the lead identifier.
    #[must_use]
    pub const fn id(&self) -> LeadId {
        self.id
    }

    /// Returns the contact name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the pipeline status.
    #[must_use]
    pub const fn status(&self) -> PipelineStatus {
        self.status
    }

    /// Returns the last-contact date.
    #[must_use]
    pub const fn last_contact(&self) -> NaiveDate {
        self.last_contact
    }

    /// Returns the referenced property, if any.
    #[must_use]
    pub const fn property_of_interest(&self) -> Option<PropertyId> {
        self.property_of_interest
    }

    /// Returns the client-needs narrative.
    #[must_use]
    pub fn client_needs(&self) -> &str {
        &self.client_needs
    }

    /// Returns the acquisition source.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Returns the responsible agent.
    #[must_use]
    pub fn agent(&self) -> Option<&str> {
        self.agent.as_deref()
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

    /// Returns a copy with edited contact fields.
    ///
    /// # Errors
    ///
    /// Returns [`LeadDomainError::EmptyName`] or
    /// [`LeadDomainError::EmptyEmail`] when a required field is blank.
    pub fn with_contact(
        mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, LeadDomainError> {
        self.name = required(name.into(), LeadDomainError::EmptyName)?;
        self.email = required(email.into(), LeadDomainError::EmptyEmail)?;
        self.phone = phone.into();
        Ok(self)
    }

    /// Returns a copy with an edited client-needs narrative.
    #[must_use]
    pub fn with_client_needs(mut self, client_needs: impl Into<String>) -> Self {
        self.client_needs = client_needs.into();
        self
    }

    /// Returns a copy with edited reporting attribution.
    #[must_use]
    pub fn with_attribution(mut self, source: Option<String>, agent: Option<String>) -> Self {
        self.source = source.and_then(optional);
        self.agent = agent.and_then(optional);
        self
    }

    /// Returns a copy pointing at another property.
    #[must_use]
    pub const fn with_property_of_interest(mut self, property_id: Option<PropertyId>) -> Self {
        self.property_of_interest = property_id;
        self
    }

    /// Returns a copy with an explicitly chosen status.
    #[must_use]
    pub const fn with_status(mut self, status: PipelineStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns a copy with an explicitly chosen last-contact date.
    #[must_use]
    pub const fn with_last_contact(mut self, last_contact: NaiveDate) -> Self {
        self.last_contact = last_contact;
        self
    }

    /// Records contact made on the clock's current UTC date.
    pub fn record_contact(&mut self, clock: &impl Clock) {
        let timestamp = clock.utc();
        self.last_contact = timestamp.date_naive();
        self.updated_at = timestamp;
    }

    /// Moves the lead to `status` and records contact made today.
    pub fn advance_to(&mut self, status: PipelineStatus, clock: &impl Clock) {
        self.status = status;
        self.record_contact(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    pub fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

fn required(value: String, error: LeadDomainError) -> Result<String, LeadDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed.to_owned())
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
