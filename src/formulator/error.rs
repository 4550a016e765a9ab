use crate::clients::IdentityError;
use thiserror::Error;

/// Input problems that stop a formulator action before anything leaves the process.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormulatorError {
    #[error("Project name is required")]
    EmptyName,

    #[error("Add at least one ingredient before analyzing")]
    NoIngredients,

    #[error("Sign in to save projects")]
    NotSignedIn,

    #[error("Could not determine the signed-in user: {0}")]
    Identity(#[from] IdentityError),
}
