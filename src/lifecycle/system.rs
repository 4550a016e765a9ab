use crate::clients::{IdentityProvider, ProjectClient, ProjectStore, TextGenerator};
use crate::config::AppConfig;
use crate::dashboard::DashboardAggregator;
use crate::formulator::{AnalysisRequestor, FormulatorSession, ProjectPersistenceAdapter};
use crate::session::SessionContext;
use std::sync::Arc;
use tracing::{error, info, warn};

/// The workbench runtime: the project collection, the shared session context and the
/// collaborators every page is built from.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use tyce::clients::{OfflineTextGenerator, StaticIdentityProvider};
/// use tyce::config::AppConfig;
/// use tyce::lifecycle::WorkbenchSystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let config = AppConfig::default();
///     let identity = Arc::new(StaticIdentityProvider::signed_in(config.operator.to_user()));
///     let system = WorkbenchSystem::new(config, identity, Arc::new(OfflineTextGenerator));
///
///     let user = system.session.refresh().await.map_err(|e| e.to_string())?;
///     let dashboard = system.dashboard().load(&user.unwrap().id).await;
///     assert!(dashboard.projects.is_empty());
///
///     system.shutdown().await
/// }
/// ```
pub struct WorkbenchSystem {
    /// Authentication state shared by every page.
    pub session: Arc<SessionContext>,

    /// Client for the project collection.
    pub project_client: ProjectClient,

    generator: Arc<dyn TextGenerator>,
    page_size: usize,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl WorkbenchSystem {
    /// Starts the project collection (when provisioned) and wires the collaborators.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(
        config: AppConfig,
        identity: Arc<dyn IdentityProvider>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        let (project_actor, project_client) = crate::project_store::new(config.store_buffer_size);

        let mut handles = Vec::new();
        if config.store_provisioned {
            handles.push(tokio::spawn(project_actor.run()));
        } else {
            warn!("Projects collection not provisioned, store calls will fail");
            drop(project_actor);
        }

        Self {
            session: Arc::new(SessionContext::new(identity)),
            project_client,
            generator,
            page_size: config.dashboard_page_size,
            handles,
        }
    }

    fn store(&self) -> Arc<dyn ProjectStore> {
        Arc::new(self.project_client.clone())
    }

    pub fn dashboard(&self) -> DashboardAggregator {
        DashboardAggregator::new(self.store(), self.page_size)
    }

    /// A fresh, empty formulation draft.
    pub fn formulator(&self) -> FormulatorSession {
        FormulatorSession::new(
            self.session.clone(),
            AnalysisRequestor::new(self.generator.clone()),
            ProjectPersistenceAdapter::new(self.store()),
        )
    }

    /// Gracefully shuts down the system.
    ///
    /// The project collection stops once every client is gone, so aggregators and
    /// formulator sessions handed out by this system must be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.project_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
