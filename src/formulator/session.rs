//! The formulator page's working state.

use super::analysis::{Analysis, AnalysisRequestor};
use super::editor::IngredientListEditor;
use super::error::FormulatorError;
use super::persistence::{ProjectPersistenceAdapter, SaveOutcome};
use crate::model::{ProjectAnalysis, ProjectDraft, User};
use crate::navigation::Page;
use crate::session::SessionContext;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Result of a save attempt that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveReport {
    pub outcome: SaveOutcome,
    /// Where the user goes next. Always the dashboard, whatever the outcome.
    pub next_page: Page,
}

/// One formulation draft: project fields, ingredient list and latest analysis.
///
/// `analyze` and `save` take `&mut self`, so a session has at most one of them in flight.
pub struct FormulatorSession {
    auth: Arc<SessionContext>,
    requestor: AnalysisRequestor,
    persistence: ProjectPersistenceAdapter,
    name: String,
    description: String,
    editor: IngredientListEditor,
    analysis: Option<Analysis>,
}

impl FormulatorSession {
    pub fn new(
        auth: Arc<SessionContext>,
        requestor: AnalysisRequestor,
        persistence: ProjectPersistenceAdapter,
    ) -> Self {
        Self {
            auth,
            requestor,
            persistence,
            name: String::new(),
            description: String::new(),
            editor: IngredientListEditor::new(),
            analysis: None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn editor(&self) -> &IngredientListEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut IngredientListEditor {
        &mut self.editor
    }

    /// The most recent analysis, if one has run.
    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    pub fn can_analyze(&self) -> bool {
        !self.editor.is_empty()
    }

    pub fn can_save(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Analyzes the current ingredient list, replacing any earlier analysis.
    #[instrument(skip(self), fields(ingredients = self.editor.len()))]
    pub async fn analyze(&mut self) -> Result<&Analysis, FormulatorError> {
        if !self.can_analyze() {
            return Err(FormulatorError::NoIngredients);
        }
        let analysis = self
            .requestor
            .analyze(self.editor.ingredients())
            .await
            .ok_or(FormulatorError::NoIngredients)?;
        Ok(&*self.analysis.insert(analysis))
    }

    /// Saves the draft as a new project owned by the signed-in user.
    ///
    /// Name and sign-in are checked first; nothing is written when either check fails.
    /// A failed store write is reported in the outcome, not as an error.
    #[instrument(skip(self), fields(name = %self.name))]
    pub async fn save(&mut self) -> Result<SaveReport, FormulatorError> {
        if !self.can_save() {
            return Err(FormulatorError::EmptyName);
        }
        let user = self.auth.refresh().await?.ok_or(FormulatorError::NotSignedIn)?;

        let draft = self.compose_draft(&user);
        debug!(ingredients = draft.ingredients.len(), analyzed = draft.analysis.is_some(), "Saving draft");
        let outcome = self.persistence.save(draft).await;

        Ok(SaveReport {
            outcome,
            next_page: Page::Dashboard,
        })
    }

    fn compose_draft(&self, user: &User) -> ProjectDraft {
        let description = self.description.trim();
        ProjectDraft {
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            user_id: user.id.clone(),
            ingredients: self.editor.ingredients().to_vec(),
            analysis: self
                .analysis
                .as_ref()
                .map(|a| ProjectAnalysis::from(&a.result)),
        }
    }
}
