//! # Framework Errors
//!
//! Errors raised by the record store plumbing itself, shared by every collection.

/// Errors that can occur within the record store framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor task is gone (never spawned, or shut down), so the collection is unavailable.
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Record rejected: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
