//! # StoredEntity Trait
//!
//! The `StoredEntity` trait defines the contract that every record kind (projects today)
//! must implement to be kept by the generic [`RecordActor`](crate::framework::RecordActor).
//! One actor is one collection: the trait's associated types describe what a new record
//! is built from (`Draft`), how a `list` request selects records (`Filter`), and which
//! error the record's own validation produces.
//!
//! # Architecture Note
//! The actor loop and its client are generic over this trait. A `Project` collection
//! only accepts a `ProjectDraft`; any other payload is a compile error.

use chrono::{DateTime, Utc};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to be kept by a `RecordActor`.
pub trait StoredEntity: Clone + Send + Sync + 'static {
    /// The store-assigned identifier.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data the caller supplies to create a record (everything but id and timestamps).
    type Draft: Send + Sync + Debug;

    /// Predicate payload of a `list` request.
    type Filter: Send + Sync + Debug;

    /// The error type for record validation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the full record from the assigned id, the draft and the write time.
    ///
    /// This is where the collection's schema is enforced: returning `Err` rejects the
    /// write and nothing is stored.
    fn from_draft(id: Self::Id, draft: Self::Draft, now: DateTime<Utc>) -> Result<Self, Self::Error>;

    /// The record's identifier.
    fn id(&self) -> &Self::Id;

    /// Whether the record is selected by `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Ordering key for `list` requests (last modification time).
    fn updated_at(&self) -> DateTime<Utc>;
}
