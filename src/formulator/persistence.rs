//! Best-effort project saving.

use crate::clients::ProjectStore;
use crate::model::{Project, ProjectDraft};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// What happened to a save attempt. Neither variant is an error for the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The store accepted the project.
    Stored(Project),
    /// The store write failed; the project exists only in the caller's session.
    LocalOnly { reason: String },
}

impl SaveOutcome {
    pub fn is_stored(&self) -> bool {
        matches!(self, SaveOutcome::Stored(_))
    }

    pub fn project(&self) -> Option<&Project> {
        match self {
            SaveOutcome::Stored(project) => Some(project),
            SaveOutcome::LocalOnly { .. } => None,
        }
    }
}

/// Writes composed projects to the [`ProjectStore`]: one `create` call per save, no retries.
#[derive(Clone)]
pub struct ProjectPersistenceAdapter {
    store: Arc<dyn ProjectStore>,
}

impl ProjectPersistenceAdapter {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    #[instrument(skip_all, fields(name = %draft.name, user_id = %draft.user_id))]
    pub async fn save(&self, draft: ProjectDraft) -> SaveOutcome {
        match self.store.create(draft).await {
            Ok(project) => {
                info!(project_id = %project.id, "Project saved");
                SaveOutcome::Stored(project)
            }
            Err(e) => {
                warn!(error = %e, "Store write failed, project kept locally");
                SaveOutcome::LocalOnly {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ProjectClient;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;
    use crate::model::{Category, Ingredient, Unit};
    use crate::project_store;

    fn draft() -> ProjectDraft {
        ProjectDraft {
            name: "Face Serum".into(),
            description: Some("Lightweight".into()),
            user_id: "u1".into(),
            ingredients: vec![Ingredient::new("ing_1", "Niacinamide", 4.0, Unit::Percent, Category::ActiveIngredient)],
            analysis: None,
        }
    }

    #[tokio::test]
    async fn test_save_stores_project() {
        let (actor, client) = project_store::new(8);
        tokio::spawn(actor.run());
        let adapter = ProjectPersistenceAdapter::new(Arc::new(client));

        let outcome = adapter.save(draft()).await;
        let project = outcome.project().expect("stored");
        assert_eq!(project.id.as_str(), "project_1");
        assert_eq!(project.name, "Face Serum");
        assert_eq!(project.created_at, project.updated_at);
    }

    #[tokio::test]
    async fn test_save_failure_degrades_to_local_only() {
        let mut mock = MockClient::<Project>::new();
        mock.expect_create().return_err(FrameworkError::ActorClosed);
        let adapter = ProjectPersistenceAdapter::new(Arc::new(ProjectClient::new(mock.client())));

        let outcome = adapter.save(draft()).await;
        assert!(!outcome.is_stored());
        assert!(matches!(outcome, SaveOutcome::LocalOnly { reason } if reason.contains("not available")));
        mock.verify();
    }
}
