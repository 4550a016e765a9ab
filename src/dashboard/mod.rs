//! # Dashboard
//!
//! Loads the signed-in user's most recently updated projects. When the store cannot be
//! read the dashboard shows two built-in demo projects instead; [`DashboardData::is_demo_mode`]
//! tells the two cases apart.

pub mod demo;

pub use demo::{demo_projects, is_demo_id, DEMO_ID_PREFIX};

use crate::clients::ProjectStore;
use crate::framework::{ListQuery, SortOrder};
use crate::model::{Project, ProjectFilter, User, UserId};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Projects shown on the dashboard, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub projects: Vec<Project>,
}

impl DashboardData {
    /// True when the projects are the demo substitutes.
    pub fn is_demo_mode(&self) -> bool {
        self.projects.first().is_some_and(|p| is_demo_id(&p.id))
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            active_projects: self.projects.len(),
            formulations: self.projects.iter().map(Project::ingredient_count).sum(),
        }
    }
}

/// Summary counters shown above the project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub active_projects: usize,
    /// Ingredient rows across all listed projects.
    pub formulations: usize,
}

/// Everything the dashboard page renders for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub greeting: String,
    pub data: DashboardData,
    pub stats: DashboardStats,
}

#[derive(Clone)]
pub struct DashboardAggregator {
    store: Arc<dyn ProjectStore>,
    page_size: usize,
}

impl DashboardAggregator {
    pub fn new(store: Arc<dyn ProjectStore>, page_size: usize) -> Self {
        Self { store, page_size }
    }

    /// One `list` call: projects owned by `user_id`, newest-updated first, at most a page.
    #[instrument(skip(self), fields(page_size = self.page_size))]
    pub async fn load(&self, user_id: &UserId) -> DashboardData {
        let query = ListQuery::new(ProjectFilter::owned_by(user_id.clone()))
            .order(SortOrder::NewestFirst)
            .limit(self.page_size);

        match self.store.list(query).await {
            Ok(projects) => {
                info!(count = projects.len(), "Dashboard loaded");
                DashboardData { projects }
            }
            Err(e) => {
                warn!(error = %e, "Project listing failed, showing demo projects");
                DashboardData {
                    projects: demo_projects(user_id, Utc::now()),
                }
            }
        }
    }

    pub async fn view(&self, user: &User) -> DashboardView {
        let data = self.load(&user.id).await;
        let stats = data.stats();
        DashboardView {
            greeting: format!("Welcome back, {}", user.greeting_name()),
            data,
            stats,
        }
    }
}
