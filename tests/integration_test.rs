use std::sync::Arc;
use tyce::clients::{
    OfflineTextGenerator, ProjectStore, ScriptedTextGenerator, StaticIdentityProvider,
};
use tyce::config::AppConfig;
use tyce::formulator::{AnalysisSource, IngredientUpdate, SaveOutcome};
use tyce::framework::ListQuery;
use tyce::lifecycle::WorkbenchSystem;
use tyce::model::{Category, ProjectDraft, ProjectFilter, Unit, User};
use tyce::navigation::{Page, View};

fn operator() -> User {
    User::new("u1", "ada@example.com").with_display_name("Ada")
}

fn analysis_reply() -> String {
    serde_json::json!({
        "properties": {
            "viscosity": 62,
            "color": "#fff8e7",
            "texture": "Rich cream",
            "thickness": 7,
            "expiryDate": "2027-10-18",
            "stability": 93,
            "performance": 87,
            "safetyScore": 96
        },
        "visualOutput": {
            "colorPreview": "#fff8e7",
            "textureDescription": "Thick cream with a soft finish"
        },
        "costAnalysis": {
            "totalProductionCost": 31.0,
            "costPerUnit": 3.1,
            "recommendedRetailPrice": 24.0,
            "profitMargin": 61.0
        },
        "suggestions": ["Add ceramides"],
        "safetyNotes": ["For external use only"]
    })
    .to_string()
}

fn draft_for(user_id: &str, name: &str) -> ProjectDraft {
    ProjectDraft {
        name: name.to_string(),
        description: None,
        user_id: user_id.into(),
        ingredients: Vec::new(),
        analysis: None,
    }
}

/// Full end-to-end flow with the real project collection.
#[tokio::test]
async fn test_full_workbench_flow() {
    let generator = Arc::new(ScriptedTextGenerator::new().reply_with(analysis_reply()));
    let system = WorkbenchSystem::new(
        AppConfig::default(),
        Arc::new(StaticIdentityProvider::signed_in(operator())),
        generator.clone(),
    );

    let mut session = system.formulator();
    session.set_name("Barrier Cream");
    session.set_description("  ");
    {
        let editor = session.editor_mut();
        let id = editor.add();
        editor.update(&id, IngredientUpdate::Name("Glycerin".into()));
        editor.update(&id, IngredientUpdate::Quantity("5".into()));
        editor.update(&id, IngredientUpdate::Unit(Unit::Percent));
        editor.update(&id, IngredientUpdate::Category(Category::Humectant));
    }

    let analysis = session.analyze().await.expect("analysis").clone();
    assert_eq!(analysis.source, AnalysisSource::Generated);
    assert!(generator.prompts()[0].contains("Glycerin (5%) - Humectant"));

    let report = session.save().await.expect("save passes validation");
    assert_eq!(report.next_page, Page::Dashboard);
    assert_eq!(report.next_page.renders(), View::Dashboard);

    let stored = match report.outcome {
        SaveOutcome::Stored(project) => project,
        other => panic!("expected a stored project, got {:?}", other),
    };
    assert_eq!(stored.id.as_str(), "project_1");
    assert_eq!(stored.description, None);
    assert_eq!(
        stored.analysis.as_ref().map(|a| &a.properties),
        Some(&analysis.result.properties)
    );

    let fetched = system
        .project_client
        .get(stored.id.clone())
        .await
        .expect("Failed to get project")
        .expect("Project not found");
    assert_eq!(fetched, stored);

    let view = system.dashboard().view(&operator()).await;
    assert_eq!(view.greeting, "Welcome back, Ada");
    assert!(!view.data.is_demo_mode());
    assert_eq!(view.data.projects, vec![stored]);
    assert_eq!(view.stats.formulations, 1);

    drop(session);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_dashboard_pages_newest_first_for_owner_only() {
    let system = WorkbenchSystem::new(
        AppConfig::default(),
        Arc::new(StaticIdentityProvider::signed_in(operator())),
        Arc::new(OfflineTextGenerator),
    );

    for i in 0..8 {
        system
            .project_client
            .create(draft_for("u1", &format!("Batch {i}")))
            .await
            .expect("Failed to create project");
    }
    system
        .project_client
        .create(draft_for("someone-else", "Not mine"))
        .await
        .expect("Failed to create project");

    let data = system.dashboard().load(&"u1".into()).await;
    assert_eq!(data.projects.len(), 6);
    assert!(data.projects.iter().all(|p| p.user_id.as_str() == "u1"));
    assert!(data
        .projects
        .windows(2)
        .all(|pair| pair[0].updated_at >= pair[1].updated_at));

    let everyone = system
        .project_client
        .list(ListQuery::new(ProjectFilter::default()))
        .await
        .expect("Failed to list projects");
    assert_eq!(everyone.len(), 9);

    system.shutdown().await.expect("Shutdown failed");
}

/// Without a projects collection the workbench still works, in degraded mode.
#[tokio::test]
async fn test_unprovisioned_store_degrades() {
    let config = AppConfig {
        store_provisioned: false,
        ..AppConfig::default()
    };
    let system = WorkbenchSystem::new(
        config,
        Arc::new(StaticIdentityProvider::signed_in(operator())),
        Arc::new(OfflineTextGenerator),
    );

    let data = system.dashboard().load(&"u1".into()).await;
    assert!(data.is_demo_mode());
    let ids: Vec<_> = data.projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["demo-1", "demo-2"]);

    let mut session = system.formulator();
    session.set_name("Offline Draft");
    session.editor_mut().add();
    let analysis = session.analyze().await.expect("analysis").clone();
    assert_eq!(analysis.source, AnalysisSource::Fallback);

    let report = session.save().await.expect("save passes validation");
    assert!(matches!(report.outcome, SaveOutcome::LocalOnly { .. }));
    assert_eq!(report.next_page, Page::Dashboard);

    drop(session);
    system.shutdown().await.expect("Shutdown failed");
}
