//! Follow-up email drafting.
//!
//! A [`FollowUpWriter`] (typically a hosted language model) drafts the email
//! body. [`FollowUpEmailService`] guarantees a displayable string whatever
//! happens: a built-in template when no writer is configured, and a fixed
//! apology when drafting fails.

mod context;
mod service;
mod templates;
mod writer;

pub use context::FollowUpContext;
pub use service::FollowUpEmailService;
pub use templates::FAILURE_MESSAGE;
pub use writer::{FollowUpWriter, FollowUpWriterError};
