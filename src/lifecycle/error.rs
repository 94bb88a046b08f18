//! Errors surfaced by lifecycle operations.

use crate::lead::{domain::LeadId, services::LeadStoreError};
use crate::property::services::PropertyCatalogError;
use crate::task::{
    domain::{TaskDomainError, TaskId},
    services::TaskStoreError,
};
use thiserror::Error;

/// Failure of a coordinated operation.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The task draft is incomplete. Nothing was written.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The draft names a lead that does not exist. Nothing was written.
    #[error("lead not found: {0}")]
    UnknownLead(LeadId),

    /// A lead operation failed before anything else was written.
    #[error(transparent)]
    Leads(#[from] LeadStoreError),

    /// A task operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskStoreError),

    /// A catalog operation failed.
    #[error(transparent)]
    Properties(#[from] PropertyCatalogError),

    /// The task was saved but the lead could not be updated afterwards.
    #[error("task {task_id} saved but its lead was not updated: {source}")]
    PartialApply {
        /// The task that was persisted.
        task_id: TaskId,
        /// Why the lead update failed.
        #[source]
        source: LeadStoreError,
    },
}

/// Result type for lifecycle operations.
pub type LifecycleResult<T> = Result<T, LifecycleError>;

impl LifecycleError {
    /// Returns the pt-BR message shown to the user.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Por favor, preencha a data, hora e selecione um lead.",
            Self::UnknownLead(_) => "O lead selecionado não existe mais.",
            Self::PartialApply { .. } => {
                "A tarefa foi salva, mas o lead não foi atualizado. Por favor, tente novamente."
            }
            Self::Leads(_) | Self::Tasks(_) | Self::Properties(_) => {
                "Não foi possível salvar as alterações. Por favor, tente novamente."
            }
        }
    }
}
