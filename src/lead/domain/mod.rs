//! Domain model for leads moving through the sales pipeline.

mod error;
mod filter;
mod ids;
mod lead;
mod status;

pub use error::{LeadDomainError, ParsePipelineStatusError};
pub use filter::LeadFilter;
pub use ids::LeadId;
pub use lead::{INTEGRATION_SOURCE, Lead, NewLead, PersistedLeadData, UNASSIGNED_AGENT};
pub use status::PipelineStatus;
