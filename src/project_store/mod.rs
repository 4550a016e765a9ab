//! # Project Collection
//!
//! The in-process "projects" collection of the structured store.
//!
//! - [`entity`] - [`StoredEntity`](crate::framework::StoredEntity) implementation for [`Project`]
//! - [`error`] - [`ProjectError`], the collection's schema violations
//! - [`new()`] - Factory that creates the actor and its client
//!
//! ```rust
//! use tyce::project_store;
//! use tyce::clients::ProjectStore;
//! use tyce::model::{ProjectDraft, ProjectFilter};
//! use tyce::framework::ListQuery;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = project_store::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let draft = ProjectDraft {
//!         name: "Gentle Cleanser".into(),
//!         description: None,
//!         user_id: "u1".into(),
//!         ingredients: Vec::new(),
//!         analysis: None,
//!     };
//!     let project = client.create(draft).await?;
//!     let mine = client.list(ListQuery::new(ProjectFilter::owned_by("u1"))).await?;
//!     assert_eq!(mine[0].id, project.id);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProjectClient;
use crate::framework::RecordActor;
use crate::model::{Project, ProjectId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates the project collection actor and its client. Ids are `project_<n>`.
pub fn new(buffer_size: usize) -> (RecordActor<Project>, ProjectClient) {
    let project_id_counter = Arc::new(AtomicU64::new(1));
    let next_project_id = move || {
        let id = project_id_counter.fetch_add(1, Ordering::SeqCst);
        ProjectId(format!("project_{}", id))
    };

    let (actor, generic_client) = RecordActor::new(buffer_size, next_project_id);
    let client = ProjectClient::new(generic_client);

    (actor, client)
}
