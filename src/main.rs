//! Demo walkthrough: sign in, draft a formulation, analyze it, save it, open the dashboard.

use std::sync::Arc;
use tracing::{info, warn, Instrument};
use tyce::clients::{OfflineTextGenerator, StaticIdentityProvider};
use tyce::config::AppConfig;
use tyce::formulator::{IngredientUpdate, SaveOutcome};
use tyce::lifecycle::{setup_tracing, WorkbenchSystem};
use tyce::model::{Category, Unit};
use tyce::navigation::visible_items;

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = AppConfig::load().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_filter);

    info!("Starting formulation workbench");

    let identity = Arc::new(StaticIdentityProvider::new(config.operator.to_user()));
    let system = WorkbenchSystem::new(config, identity, Arc::new(OfflineTextGenerator));

    let user = system.session.sign_in().await.map_err(|e| e.to_string())?;
    let pages: Vec<_> = visible_items(user.role).iter().map(|item| item.label).collect();
    info!(user_id = %user.id, ?pages, "Signed in");

    let span = tracing::info_span!("formulation");
    let report = async {
        let mut draft = system.formulator();
        draft.set_name("Moisturizing Face Cream");
        draft.set_description("Daily moisturizer");

        for (name, quantity, unit, category) in [
            ("Water", "70", Unit::Percent, Category::Solvent),
            ("Glycerin", "5", Unit::Percent, Category::Humectant),
            ("Cetearyl Alcohol", "3", Unit::Percent, Category::Emulsifier),
        ] {
            let editor = draft.editor_mut();
            let id = editor.add();
            editor.update(&id, IngredientUpdate::Name(name.to_string()));
            editor.update(&id, IngredientUpdate::Quantity(quantity.to_string()));
            editor.update(&id, IngredientUpdate::Unit(unit));
            editor.update(&id, IngredientUpdate::Category(category));
        }

        let analysis = draft.analyze().await.map_err(|e| e.to_string())?;
        info!(
            source = ?analysis.source,
            viscosity = analysis.result.properties.viscosity,
            expiry = %analysis.result.properties.expiry_date,
            "Analysis ready"
        );

        draft.save().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    match &report.outcome {
        SaveOutcome::Stored(project) => info!(project_id = %project.id, "Project saved"),
        SaveOutcome::LocalOnly { reason } => warn!(%reason, "Project kept locally"),
    }
    info!(next_page = %report.next_page, "Navigating");

    let view = system.dashboard().view(&user).await;
    info!(
        greeting = %view.greeting,
        active_projects = view.stats.active_projects,
        formulations = view.stats.formulations,
        demo = view.data.is_demo_mode(),
        "Dashboard"
    );
    for project in &view.data.projects {
        info!(project_id = %project.id, name = %project.name, "Listed");
    }

    system.shutdown().await
}
