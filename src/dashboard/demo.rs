//! The built-in demo projects shown when the store is unreachable.

use crate::model::{
    Category, CostAnalysis, Ingredient, ProductProperties, Project, ProjectAnalysis, ProjectId,
    Unit, UserId, VisualOutput,
};
use chrono::{DateTime, NaiveDate, Utc};

pub const DEMO_ID_PREFIX: &str = "demo-";

pub fn is_demo_id(id: &ProjectId) -> bool {
    id.as_str().starts_with(DEMO_ID_PREFIX)
}

/// Exactly two demo projects owned by `user_id`, both stamped `now`.
pub fn demo_projects(user_id: &UserId, now: DateTime<Utc>) -> Vec<Project> {
    vec![
        Project {
            id: ProjectId::from("demo-1"),
            name: "Moisturizing Face Cream".to_string(),
            description: Some("Anti-aging moisturizer with hyaluronic acid".to_string()),
            user_id: user_id.clone(),
            ingredients: vec![
                Ingredient::new("1", "Hyaluronic Acid", 2.0, Unit::Percent, Category::ActiveIngredient)
                    .with_function("Moisturizing"),
                Ingredient::new("2", "Glycerin", 5.0, Unit::Percent, Category::Humectant)
                    .with_function("Moisture retention"),
            ],
            analysis: Some(ProjectAnalysis {
                properties: ProductProperties {
                    viscosity: 85.0,
                    color: "#F5F5DC".to_string(),
                    texture: "Smooth cream".to_string(),
                    thickness: 8.0,
                    expiry_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default(),
                    stability: 95.0,
                    performance: 88.0,
                    safety_score: 92.0,
                },
                visual_output: VisualOutput {
                    color_preview: "#F5F5DC".to_string(),
                    texture_description: "Rich cream that absorbs without residue".to_string(),
                },
                cost_analysis: CostAnalysis {
                    total_production_cost: 24.0,
                    cost_per_unit: 4.0,
                    recommended_retail_price: 29.0,
                    profit_margin: 58.0,
                },
            }),
            created_at: now,
            updated_at: now,
        },
        Project {
            id: ProjectId::from("demo-2"),
            name: "Gentle Cleanser".to_string(),
            description: Some("Sulfate-free facial cleanser".to_string()),
            user_id: user_id.clone(),
            ingredients: vec![Ingredient::new(
                "1",
                "Cocamidopropyl Betaine",
                15.0,
                Unit::Percent,
                Category::Surfactant,
            )
            .with_function("Cleansing")],
            analysis: None,
            created_at: now,
            updated_at: now,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_projects_are_well_formed() {
        let projects = demo_projects(&"u1".into(), Utc::now());
        assert_eq!(projects.len(), 2);
        for project in &projects {
            assert!(is_demo_id(&project.id));
            assert_eq!(project.user_id.as_str(), "u1");
            if let Some(analysis) = &project.analysis {
                assert_eq!(analysis.validate(), Ok(()));
            }
        }
        assert!(projects[1].analysis.is_none());
    }

    #[test]
    fn test_demo_prefix_detection() {
        assert!(is_demo_id(&"demo-7".into()));
        assert!(!is_demo_id(&"project_1".into()));
        assert!(!is_demo_id(&"demo".into()));
    }
}
