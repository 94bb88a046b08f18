//! Domain model for scheduled tasks and task drafts.

mod draft;
mod error;
mod ids;
mod task;

pub use draft::{TaskDraft, ValidTaskDraft};
pub use error::{ParseTaskTypeError, TaskDomainError};
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskType};
