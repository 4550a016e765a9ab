//! # Session Context
//!
//! Authentication state is an owned value, passed to whatever needs it. A
//! [`SessionContext`] wraps an [`IdentityProvider`] and publishes every change of
//! [`AuthState`] on a `tokio::sync::watch` channel. Observers hold an [`AuthSubscription`];
//! dropping it (or calling [`AuthSubscription::unsubscribe`]) ends the observation.
//!
//! ```rust
//! use std::sync::Arc;
//! use tyce::clients::StaticIdentityProvider;
//! use tyce::model::User;
//! use tyce::session::SessionContext;
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = StaticIdentityProvider::new(User::new("u1", "ada@example.com"));
//!     let session = SessionContext::new(Arc::new(provider));
//!     assert!(session.state().is_loading);
//!
//!     let mut subscription = session.subscribe();
//!     session.sign_in().await.unwrap();
//!
//!     let state = subscription.changed().await.unwrap();
//!     assert_eq!(state.user.map(|u| u.email), Some("ada@example.com".to_string()));
//! }
//! ```

use crate::clients::{IdentityError, IdentityProvider};
use crate::model::User;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Snapshot of the authentication state.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the first answer from the identity service.
    pub is_loading: bool,
}

impl AuthState {
    fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    fn settled(user: Option<User>) -> Self {
        Self {
            user,
            is_loading: false,
        }
    }
}

pub struct SessionContext {
    provider: Arc<dyn IdentityProvider>,
    state: watch::Sender<AuthState>,
}

impl SessionContext {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        let (state, _) = watch::channel(AuthState::loading());
        Self { provider, state }
    }

    /// Asks the identity service who is signed in and publishes the answer.
    ///
    /// A failed call settles the state as signed out and returns the error.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<Option<User>, IdentityError> {
        match self.provider.current_user().await {
            Ok(user) => {
                debug!(signed_in = user.is_some(), "Auth state refreshed");
                self.publish(AuthState::settled(user.clone()));
                Ok(user)
            }
            Err(e) => {
                warn!(error = %e, "Identity lookup failed");
                self.publish(AuthState::settled(None));
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn sign_in(&self) -> Result<User, IdentityError> {
        let user = self.provider.sign_in().await?;
        info!(user_id = %user.id, "Session started");
        self.publish(AuthState::settled(Some(user.clone())));
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<(), IdentityError> {
        self.provider.sign_out().await?;
        info!("Session ended");
        self.publish(AuthState::settled(None));
        Ok(())
    }

    /// The user of the last published state. Makes no external call.
    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> AuthSubscription {
        AuthSubscription {
            receiver: self.state.subscribe(),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.state.receiver_count()
    }

    fn publish(&self, next: AuthState) {
        self.state.send_replace(next);
    }
}

/// An observer of auth state changes.
pub struct AuthSubscription {
    receiver: watch::Receiver<AuthState>,
}

impl AuthSubscription {
    pub fn current(&self) -> AuthState {
        self.receiver.borrow().clone()
    }

    /// Waits for the next published state. `None` once the session context is gone.
    pub async fn changed(&mut self) -> Option<AuthState> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    pub fn unsubscribe(self) {}
}
