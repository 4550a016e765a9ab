//! Saved product formulations.
//!
//! [`Project`] implements [`StoredEntity`](crate::framework::StoredEntity) in
//! [`project_store`](crate::project_store), with [`ProjectDraft`] as the creation payload
//! and [`ProjectFilter`] as the list filter.

use crate::model::{Ingredient, ProjectAnalysis, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Store-assigned project identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub user_id: UserId,
    pub ingredients: Vec<Ingredient>,
    /// Absent until an analysis has been saved with the project.
    #[serde(flatten)]
    pub analysis: Option<ProjectAnalysis>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }
}

/// Payload for creating a project: everything the store does not assign.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: Option<String>,
    pub user_id: UserId,
    pub ingredients: Vec<Ingredient>,
    pub analysis: Option<ProjectAnalysis>,
}

/// Selection applied by a project listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    /// Only projects owned by this user; `None` selects every project.
    pub user_id: Option<UserId>,
}

impl ProjectFilter {
    pub fn owned_by(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match &self.user_id {
            Some(owner) => &project.user_id == owner,
            None => true,
        }
    }
}
