//! # Generic Client
//!
//! The client half of a record collection.

use crate::framework::entity::StoredEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ListQuery, StoreRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a `RecordActor`.
///
/// Holds only the sender, so cloning is cheap and clones can be shared across tasks.
/// Every call is one request/response round trip and the only suspension point.
pub struct RecordClient<T: StoredEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

// Manual impl: a derive would require `T: Clone` bounds on the associated types too.
impl<T: StoredEntity> Clone for RecordClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: StoredEntity> RecordClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, draft: T::Draft) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Create { draft, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self, query: ListQuery<T::Filter>) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { query, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
