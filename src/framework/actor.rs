//! # Record Store Actor
//!
//! The `RecordActor` is the server half of an in-process collection. It owns the record
//! map and the receiver end of the channel and answers `Create`, `Get` and `List`
//! requests one at a time.
//!
//! **Concurrency Model**: every collection runs in its own Tokio task and processes its
//! messages sequentially, so the `store` needs no `Mutex`. Concurrent writers are
//! serialized by the channel: the last write wins, and nothing is reordered after it has
//! been accepted.

use crate::framework::client::RecordClient;
use crate::framework::entity::StoredEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ListQuery, SortOrder, StoreRequest};
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that keeps one collection of records.
///
/// # Usage Pattern
///
/// 1.  **Create**: call `RecordActor::new()` to get the `actor` (server) and `client`.
/// 2.  **Run**: spawn `actor.run()` in a background task.
/// 3.  **Use**: clone the client wherever the collection is needed.
///
/// If the actor is never spawned (or has shut down) every client call fails with
/// [`FrameworkError::ActorClosed`], which is how an unprovisioned collection looks to
/// callers.
///
/// ## Operations
///
/// * **Create**: generates an id with `next_id_fn`, builds the record with
///   [`StoredEntity::from_draft`] (which may reject it), stores and returns it.
/// * **Get**: returns a clone of the record, or `None`.
/// * **List**: selects records with [`StoredEntity::matches`], sorts them by
///   [`StoredEntity::updated_at`] (ties broken by insertion order) and applies the cap.
pub struct RecordActor<T: StoredEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: HashMap<T::Id, T>,
    insertion_order: Vec<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: StoredEntity> RecordActor<T> {
    /// Creates a new `RecordActor` and its associated `RecordClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - capacity of the MPSC channel. When full, client calls wait.
    /// * `next_id_fn` - generator for store-assigned identifiers.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, RecordClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            insertion_order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = RecordClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Project" instead of "tyce::model::project::Project")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { draft, respond_to } => {
                    debug!(entity_type, ?draft, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_draft(id, draft, Utc::now()) {
                        Ok(record) => {
                            let id = record.id().clone();
                            self.store.insert(id.clone(), record.clone());
                            self.insertion_order.push(id.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(record));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create rejected");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::List { query, respond_to } => {
                    let page = self.select(&query);
                    debug!(entity_type, ?query, returned = page.len(), "List");
                    let _ = respond_to.send(Ok(page));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn select(&self, query: &ListQuery<T::Filter>) -> Vec<T> {
        let mut page: Vec<T> = self
            .insertion_order
            .iter()
            .filter_map(|id| self.store.get(id))
            .filter(|record| record.matches(&query.filter))
            .cloned()
            .collect();

        // Stable sort keeps insertion order among equal timestamps.
        match query.order {
            SortOrder::NewestFirst => page.sort_by(|a, b| b.updated_at().cmp(&a.updated_at())),
            SortOrder::OldestFirst => page.sort_by_key(|record| record.updated_at()),
        }
        if let Some(limit) = query.limit {
            page.truncate(limit);
        }
        page
    }
}
