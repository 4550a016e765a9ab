//! Interfaces to the external collaborators, with in-process implementations.

pub mod identity;
pub mod inference;
pub mod project_client;

pub use identity::*;
pub use inference::*;
pub use project_client::*;
