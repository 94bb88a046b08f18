//! Stat card layout entries.

use crate::dashboard::StatCardId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Icon shown on a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconId {
    /// People.
    #[serde(rename = "UsersIcon")]
    Users,
    /// Calendar.
    #[serde(rename = "CalendarIcon")]
    Calendar,
    /// Speech bubble.
    #[serde(rename = "MessageSquareIcon")]
    MessageSquare,
    /// Document.
    #[serde(rename = "FileTextIcon")]
    FileText,
    /// Handshake.
    #[serde(rename = "HandshakeIcon")]
    Handshake,
    /// Target.
    #[serde(rename = "TargetIcon")]
    Target,
}

/// One entry of the stat card layout. Order in the layout is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCardConfig {
    /// Card kind.
    pub id: StatCardId,
    /// Card title.
    pub title: String,
    /// Whether the card is shown.
    pub is_visible: bool,
    /// Card icon.
    pub icon: IconId,
}

impl StatCardConfig {
    /// Creates a visible card.
    #[must_use]
    pub fn new(id: StatCardId, title: impl Into<String>, icon: IconId) -> Self {
        Self {
            id,
            title: title.into(),
            is_visible: true,
            icon,
        }
    }

    /// Returns the card with visibility set.
    #[must_use]
    pub const fn with_visibility(mut self, is_visible: bool) -> Self {
        self.is_visible = is_visible;
        self
    }
}

/// Returns the shipped layout: all six cards, visible.
#[must_use]
pub fn default_stat_cards() -> Vec<StatCardConfig> {
    StatCardId::ALL
        .into_iter()
        .map(|id| {
            let (title, icon) = match id {
                StatCardId::NewLeads => ("Novos Leads", IconId::Users),
                StatCardId::VisitsToday => ("Visitas Hoje", IconId::Calendar),
                StatCardId::FollowUps => ("Follow-ups Pendentes", IconId::MessageSquare),
                StatCardId::ProposalsSent => ("Propostas Enviadas", IconId::FileText),
                StatCardId::DealsClosed => ("Negócios Fechados", IconId::Handshake),
                StatCardId::ConversionRate => ("Taxa de Conversão", IconId::Target),
            };
            StatCardConfig::new(id, title, icon)
        })
        .collect()
}

/// Reconciles a saved layout with the known card kinds.
///
/// Saved order, titles and visibility are kept. Repeated ids keep their
/// first entry. Kinds missing from the saved layout are appended in
/// default order.
#[must_use]
pub fn merge_stat_cards(saved: Vec<StatCardConfig>) -> Vec<StatCardConfig> {
    let mut seen = HashSet::new();
    let mut merged: Vec<StatCardConfig> = saved
        .into_iter()
        .filter(|card| seen.insert(card.id))
        .collect();
    merged.extend(
        default_stat_cards()
            .into_iter()
            .filter(|card| !seen.contains(&card.id)),
    );
    merged
}
