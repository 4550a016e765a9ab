//! Generic in-process record store.
//!
//! This module provides the building blocks for keeping a typed collection of records
//! behind an actor and talking to it through a cheap, cloneable client.
//!
//! # Main Components
//!
//! - [`StoredEntity`] - Trait that record types implement to be kept by a collection
//! - [`RecordActor`] - Generic actor that owns one collection
//! - [`RecordClient`] - Type-safe client for that actor
//! - [`ListQuery`] / [`SortOrder`] - Filter, order and cap of a `list` request
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test callers without spawning a collection.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::RecordActor;
pub use client::RecordClient;
pub use entity::StoredEntity;
pub use error::FrameworkError;
pub use message::{ListQuery, Response, SortOrder, StoreRequest};
