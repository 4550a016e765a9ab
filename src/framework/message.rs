//! # Store Messages
//!
//! Message types exchanged between a [`RecordClient`](crate::framework::RecordClient) and
//! its [`RecordActor`](crate::framework::RecordActor).

use crate::framework::entity::StoredEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Ordering applied to a `list` request, by [`StoredEntity::updated_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recently updated first.
    #[default]
    NewestFirst,
    OldestFirst,
}

/// A `list` request: filter, order and an optional page cap.
#[derive(Debug, Clone)]
pub struct ListQuery<F> {
    pub filter: F,
    pub order: SortOrder,
    pub limit: Option<usize>,
}

impl<F> ListQuery<F> {
    /// Newest-first listing with no cap.
    pub fn new(filter: F) -> Self {
        Self {
            filter,
            order: SortOrder::NewestFirst,
            limit: None,
        }
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Internal message type sent to the actor to request operations.
///
/// The store is append-only from the caller's point of view: records are created whole
/// and read back, individually or as a filtered page. The variants map onto the
/// structured-store interface (`create`, `list`) plus a by-id lookup.
#[derive(Debug)]
pub enum StoreRequest<T: StoredEntity> {
    Create {
        draft: T::Draft,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        query: ListQuery<T::Filter>,
        respond_to: Response<Vec<T>>,
    },
}
