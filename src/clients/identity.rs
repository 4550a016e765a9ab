//! # Identity
//!
//! Interface to the identity service plus a static, in-process provider.

use crate::model::User;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::{info, instrument};

/// Failures of an identity call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IdentityError {
    #[error("No user is signed in")]
    NotSignedIn,

    #[error("Identity service unavailable: {0}")]
    Unavailable(String),
}

/// The identity service. Tokens and sessions stay on the provider's side.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The signed-in user, if any.
    async fn current_user(&self) -> Result<Option<User>, IdentityError>;

    async fn sign_in(&self) -> Result<User, IdentityError>;

    async fn sign_out(&self) -> Result<(), IdentityError>;
}

/// Provider with a single fixed account, used for local runs and tests.
#[derive(Debug)]
pub struct StaticIdentityProvider {
    account: User,
    signed_in: AtomicBool,
}

impl StaticIdentityProvider {
    /// Provider whose account starts signed out.
    pub fn new(account: User) -> Self {
        Self {
            account,
            signed_in: AtomicBool::new(false),
        }
    }

    /// Provider whose account starts signed in.
    pub fn signed_in(account: User) -> Self {
        Self {
            account,
            signed_in: AtomicBool::new(true),
        }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current_user(&self) -> Result<Option<User>, IdentityError> {
        Ok(self
            .signed_in
            .load(Ordering::SeqCst)
            .then(|| self.account.clone()))
    }

    #[instrument(skip(self), fields(user_id = %self.account.id))]
    async fn sign_in(&self) -> Result<User, IdentityError> {
        self.signed_in.store(true, Ordering::SeqCst);
        info!("Signed in");
        Ok(self.account.clone())
    }

    #[instrument(skip(self), fields(user_id = %self.account.id))]
    async fn sign_out(&self) -> Result<(), IdentityError> {
        self.signed_in.store(false, Ordering::SeqCst);
        info!("Signed out");
        Ok(())
    }
}
