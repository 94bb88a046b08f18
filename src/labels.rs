//! Display label tables for the pt-BR dashboard.
//!
//! Identity lives in tagged enums; the strings here are presentation only
//! and may change without touching stored data.

use crate::lead::domain::PipelineStatus;
use crate::task::domain::TaskType;

/// Placeholder shown when a task points at a lead that no longer exists.
pub const UNKNOWN_LEAD: &str = "Lead Desconhecido";

/// Placeholder shown when a lead points at a property that no longer exists.
pub const UNKNOWN_PROPERTY: &str = "Imóvel Desconhecido";

/// Returns the column and dropdown label for a pipeline status.
#[must_use]
pub const fn status_label(status: PipelineStatus) -> &'static str {
    match status {
        PipelineStatus::New => "Novos Leads",
        PipelineStatus::Contacted => "Contactado",
        PipelineStatus::VisitScheduled => "Visita Agendada",
        PipelineStatus::Proposal => "Proposta Enviada",
        PipelineStatus::Closed => "Fechado",
    }
}

/// Returns the task title derived from its type.
#[must_use]
pub const fn task_type_label(task_type: TaskType) -> &'static str {
    match task_type {
        TaskType::Visit => "Visita ao Imóvel",
        TaskType::Call => "Ligar para Lead",
        TaskType::ContractSigning => "Assinatura de Contrato",
        TaskType::PaymentFollowUp => "Acompanhar Pagamento",
    }
}
