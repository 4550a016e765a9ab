//! StoredEntity trait implementation for the Project domain type.
//!
//! This is the collection's schema: a draft with an empty name, a negative or non-finite
//! ingredient quantity, or an out-of-range analysis is rejected and nothing is stored.

use super::error::ProjectError;
use crate::framework::StoredEntity;
use crate::model::{Project, ProjectDraft, ProjectFilter, ProjectId};
use chrono::{DateTime, Utc};

impl StoredEntity for Project {
    type Id = ProjectId;
    type Draft = ProjectDraft;
    type Filter = ProjectFilter;
    type Error = ProjectError;

    fn from_draft(id: ProjectId, draft: ProjectDraft, now: DateTime<Utc>) -> Result<Self, ProjectError> {
        if draft.name.trim().is_empty() {
            return Err(ProjectError::EmptyName);
        }
        if let Some(bad) = draft
            .ingredients
            .iter()
            .find(|ing| !(ing.quantity.is_finite() && ing.quantity >= 0.0))
        {
            return Err(ProjectError::InvalidIngredient {
                id: bad.id.to_string(),
                reason: format!("quantity {} is not a non-negative number", bad.quantity),
            });
        }
        if let Some(analysis) = &draft.analysis {
            analysis.validate().map_err(ProjectError::InvalidAnalysis)?;
        }

        Ok(Self {
            id,
            name: draft.name,
            description: draft.description.filter(|d| !d.trim().is_empty()),
            user_id: draft.user_id,
            ingredients: draft.ingredients,
            analysis: draft.analysis,
            created_at: now,
            updated_at: now,
        })
    }

    fn id(&self) -> &ProjectId {
        &self.id
    }

    fn matches(&self, filter: &ProjectFilter) -> bool {
        filter.matches(self)
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
