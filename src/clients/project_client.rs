//! # Project Client
//!
//! The structured-store interface for projects ([`ProjectStore`]) and its implementation
//! over the in-process project collection ([`ProjectClient`]).

use crate::framework::{FrameworkError, ListQuery, RecordClient};
use crate::model::{Project, ProjectDraft, ProjectFilter, ProjectId};
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, instrument};

/// Failures of a store call. All of them are ordinary return values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The collection does not exist or its backend is down.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The record does not fit the collection's schema.
    #[error("Schema mismatch: {0}")]
    Rejected(String),

    /// The request was accepted but no answer came back.
    #[error("Store communication error: {0}")]
    Communication(String),
}

/// Read/write access to the projects collection.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Projects selected by the query's filter, in its order, at most `limit` of them.
    async fn list(&self, query: ListQuery<ProjectFilter>) -> Result<Vec<Project>, StoreError>;

    /// Writes a new project and returns it with its store-assigned id and timestamps.
    async fn create(&self, draft: ProjectDraft) -> Result<Project, StoreError>;
}

/// Client for the project collection actor.
#[derive(Clone)]
pub struct ProjectClient {
    inner: RecordClient<Project>,
}

impl ProjectClient {
    pub fn new(inner: RecordClient<Project>) -> Self {
        Self { inner }
    }

    /// Map framework errors to store errors.
    fn map_error(e: FrameworkError) -> StoreError {
        match e {
            FrameworkError::ActorClosed => {
                StoreError::Unavailable("projects collection is not available".to_string())
            }
            FrameworkError::EntityError(inner) => StoreError::Rejected(inner.to_string()),
            other => StoreError::Communication(other.to_string()),
        }
    }

    /// Fetch one project by id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: ProjectId) -> Result<Option<Project>, StoreError> {
        debug!("Sending request");
        self.inner.get(id).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ProjectStore for ProjectClient {
    #[instrument(skip(self))]
    async fn list(&self, query: ListQuery<ProjectFilter>) -> Result<Vec<Project>, StoreError> {
        debug!("Sending request");
        self.inner.list(query).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create(&self, draft: ProjectDraft) -> Result<Project, StoreError> {
        debug!(?draft, "Sending request");
        self.inner.create(draft).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_list, MockClient};
    use crate::framework::SortOrder;
    use crate::project_store::ProjectError;

    #[tokio::test]
    async fn test_list_forwards_query() {
        let (client, mut receiver) = create_mock_client::<Project>(10);
        let project_client = ProjectClient::new(client);

        let list_task = tokio::spawn(async move {
            project_client
                .list(ListQuery::new(ProjectFilter::owned_by("u1")).limit(6))
                .await
        });

        let (query, responder) = expect_list(&mut receiver).await.expect("Expected List request");
        assert_eq!(query.filter, ProjectFilter::owned_by("u1"));
        assert_eq!(query.order, SortOrder::NewestFirst);
        assert_eq!(query.limit, Some(6));
        responder.send(Ok(Vec::new())).unwrap();

        assert_eq!(list_task.await.unwrap(), Ok(Vec::new()));
    }

    #[tokio::test]
    async fn test_framework_errors_map_to_store_errors() {
        let mut mock = MockClient::<Project>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(ProjectError::EmptyName)));
        mock.expect_get().return_err(FrameworkError::ActorDropped);

        let client = ProjectClient::new(mock.client());
        let listed = client.list(ListQuery::new(ProjectFilter::default())).await;
        assert!(matches!(listed, Err(StoreError::Unavailable(_))));

        let draft = ProjectDraft {
            name: String::new(),
            description: None,
            user_id: "u1".into(),
            ingredients: Vec::new(),
            analysis: None,
        };
        let created = client.create(draft).await;
        assert_eq!(
            created,
            Err(StoreError::Rejected("Project name must not be empty".to_string()))
        );

        let fetched = client.get("project_1".into()).await;
        assert!(matches!(fetched, Err(StoreError::Communication(_))));
        mock.verify();
    }
}
