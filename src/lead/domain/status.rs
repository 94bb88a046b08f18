//! Pipeline status of a lead.

use super::ParsePipelineStatusError;
use crate::labels::status_label;
use serde::{Deserialize, Serialize};

/// Ordered sales pipeline stage.
///
/// Variant order is pipeline order, so `<` means "earlier in the pipeline".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStatus {
    /// Freshly captured lead.
    New,
    /// The agent has reached out.
    Contacted,
    /// A property visit is on the calendar.
    VisitScheduled,
    /// A proposal has been sent.
    Proposal,
    /// The deal is closed.
    Closed,
}

impl PipelineStatus {
    /// Every status in pipeline order.
    pub const ALL: [Self; 5] = [
        Self::New,
        Self::Contacted,
        Self::VisitScheduled,
        Self::Proposal,
        Self::Closed,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::VisitScheduled => "visit_scheduled",
            Self::Proposal => "proposal",
            Self::Closed => "closed",
        }
    }

    /// Returns the localized display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        status_label(self)
    }
}

impl TryFrom<&str> for PipelineStatus {
    type Error = ParsePipelineStatusError;

    /// Parses the canonical form, falling back to the display labels that
    /// older records stored verbatim.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        let normalized = trimmed.to_ascii_lowercase();
        match normalized.as_str() {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "visit_scheduled" => Ok(Self::VisitScheduled),
            "proposal" => Ok(Self::Proposal),
            "closed" => Ok(Self::Closed),
            _ => Self::ALL
                .into_iter()
                .find(|status| status.label() == trimmed)
                .ok_or_else(|| ParsePipelineStatusError(value.to_owned())),
        }
    }
}
