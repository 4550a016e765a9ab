//! Error types for the project collection.

use thiserror::Error;

/// Reasons the project collection refuses a write.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProjectError {
    /// The project name is empty or whitespace.
    #[error("Project name must not be empty")]
    EmptyName,

    /// An embedded ingredient row is malformed.
    #[error("Invalid ingredient {id}: {reason}")]
    InvalidIngredient { id: String, reason: String },

    /// The embedded analysis is outside its documented ranges.
    #[error("Invalid analysis: {0}")]
    InvalidAnalysis(String),
}
