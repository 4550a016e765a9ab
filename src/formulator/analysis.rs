//! # Formulation Analysis
//!
//! Turns an ingredient list into an [`AnalysisResult`] by way of one text-generation call.
//!
//! [`AnalysisRequestor::request`] is the strict boundary: it fails with an
//! [`AnalysisFailure`] when the call fails or when the reply does not match the record
//! shape. [`AnalysisRequestor::analyze`] never fails for a non-empty list: on either kind
//! of failure it logs a warning and substitutes [`fallback_analysis`], so the caller
//! always gets a record of the same shape.

use crate::clients::{InferenceError, TextGenerator};
use crate::model::{
    AnalysisResult, CostAnalysis, Ingredient, ProductProperties, VisualOutput,
};
use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Days from today to the expiry date of a fallback analysis.
pub const SHELF_LIFE_DAYS: i64 = 365;

pub const FALLBACK_TEXTURE: &str = "Smooth and creamy";
pub const FALLBACK_TEXTURE_DESCRIPTION: &str = "Smooth, creamy texture with good spreadability";
pub const FALLBACK_SUGGESTIONS: [&str; 3] = [
    "Consider adding vitamin E for antioxidant properties",
    "Optimize pH level for better stability",
    "Add natural preservatives for clean label appeal",
];
pub const FALLBACK_SAFETY_NOTES: [&str; 3] = [
    "Patch test recommended before use",
    "Store in cool, dry place",
    "Avoid contact with eyes",
];

const PROMPT_SCHEMA: &str = r##"{
  "properties": {
    "viscosity": <number 0-100>,
    "color": "<hex colour #rrggbb>",
    "texture": "<short description>",
    "thickness": <number 1-10>,
    "expiryDate": "<YYYY-MM-DD>",
    "stability": <number 0-100>,
    "performance": <number 0-100>,
    "safetyScore": <number 0-100>
  },
  "visualOutput": {
    "colorPreview": "<hex colour #rrggbb>",
    "textureDescription": "<one sentence>"
  },
  "costAnalysis": {
    "totalProductionCost": <number>,
    "costPerUnit": <number>,
    "recommendedRetailPrice": <number>,
    "profitMargin": <percent>
  },
  "suggestions": ["<improvement>"],
  "safetyNotes": ["<note>"]
}"##;

/// Why a single analysis call produced no usable record.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalysisFailure {
    #[error("Inference call failed: {0}")]
    External(#[from] InferenceError),

    #[error("Reply does not match the analysis shape: {0}")]
    ResponseShape(String),
}

/// Where an analysis record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSource {
    Generated,
    Fallback,
}

/// An analysis record with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub result: AnalysisResult,
    pub source: AnalysisSource,
}

/// Renders the instruction sent to the text-generation service.
pub fn build_prompt(ingredients: &[Ingredient]) -> String {
    let listing = ingredients
        .iter()
        .map(Ingredient::summary_line)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Analyze this cosmetic/cleaning product formulation and provide detailed properties.\n\n\
         Ingredients: {listing}\n\n\
         Reply with a single JSON object in exactly this format:\n{PROMPT_SCHEMA}"
    )
}

/// Parses a reply into a validated record.
///
/// The reply may wrap the object in prose or a code fence; the outermost `{ ... }` span
/// is used when the whole text is not JSON.
pub fn parse_reply(text: &str) -> Result<AnalysisResult, AnalysisFailure> {
    let trimmed = text.trim();
    let result = match serde_json::from_str::<AnalysisResult>(trimmed) {
        Ok(result) => result,
        Err(whole_err) => {
            let span = outermost_object(trimmed).ok_or_else(|| {
                AnalysisFailure::ResponseShape(format!("no JSON object in reply: {whole_err}"))
            })?;
            serde_json::from_str::<AnalysisResult>(span)
                .map_err(|e| AnalysisFailure::ResponseShape(e.to_string()))?
        }
    };
    result.validate().map_err(AnalysisFailure::ResponseShape)?;
    Ok(result)
}

fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Plausible placeholder analysis used when the real one is unavailable.
///
/// Every number is an independent uniform integer draw inside its documented range.
pub fn fallback_analysis<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> AnalysisResult {
    AnalysisResult {
        properties: ProductProperties {
            viscosity: rng.gen_range(0..100) as f64,
            color: random_hex_color(rng),
            texture: FALLBACK_TEXTURE.to_string(),
            thickness: rng.gen_range(1..=10) as f64,
            expiry_date: today + Duration::days(SHELF_LIFE_DAYS),
            stability: rng.gen_range(70..100) as f64,
            performance: rng.gen_range(70..100) as f64,
            safety_score: rng.gen_range(80..100) as f64,
        },
        visual_output: VisualOutput {
            color_preview: random_hex_color(rng),
            texture_description: FALLBACK_TEXTURE_DESCRIPTION.to_string(),
        },
        cost_analysis: CostAnalysis {
            total_production_cost: rng.gen_range(10..60) as f64,
            cost_per_unit: rng.gen_range(2..7) as f64,
            recommended_retail_price: rng.gen_range(15..35) as f64,
            profit_margin: rng.gen_range(30..70) as f64,
        },
        suggestions: FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        safety_notes: FALLBACK_SAFETY_NOTES.iter().map(|s| s.to_string()).collect(),
    }
}

fn random_hex_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06x}", rng.gen_range(0..=0xFF_FFFFu32))
}

/// Requests formulation analyses from a [`TextGenerator`].
#[derive(Clone)]
pub struct AnalysisRequestor {
    generator: Arc<dyn TextGenerator>,
}

impl AnalysisRequestor {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// One generation call, parsed and validated. No fallback.
    #[instrument(skip_all, fields(ingredients = ingredients.len()))]
    pub async fn request(&self, ingredients: &[Ingredient]) -> Result<AnalysisResult, AnalysisFailure> {
        let prompt = build_prompt(ingredients);
        debug!(prompt_len = prompt.len(), "Requesting analysis");
        let reply = self.generator.generate(&prompt).await?;
        parse_reply(&reply)
    }

    /// Analysis for `ingredients`, falling back to placeholder data on any failure.
    ///
    /// Returns `None` without calling out when the list is empty.
    #[instrument(skip_all, fields(ingredients = ingredients.len()))]
    pub async fn analyze(&self, ingredients: &[Ingredient]) -> Option<Analysis> {
        if ingredients.is_empty() {
            debug!("Nothing to analyze");
            return None;
        }

        let analysis = match self.request(ingredients).await {
            Ok(result) => {
                info!("Analysis generated");
                Analysis {
                    result,
                    source: AnalysisSource::Generated,
                }
            }
            Err(failure) => {
                warn!(error = %failure, "Analysis failed, using fallback data");
                let result = fallback_analysis(&mut rand::thread_rng(), Utc::now().date_naive());
                Analysis {
                    result,
                    source: AnalysisSource::Fallback,
                }
            }
        };
        Some(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ScriptedTextGenerator;
    use crate::model::{Category, Unit};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn glycerin() -> Ingredient {
        Ingredient::new("ing_1", "Glycerin", 5.0, Unit::Percent, Category::Humectant)
    }

    fn reply_json() -> String {
        serde_json::json!({
            "properties": {
                "viscosity": 35,
                "color": "#fdf6e3",
                "texture": "Silky gel",
                "thickness": 3,
                "expiryDate": "2027-06-30",
                "stability": 88,
                "performance": 91,
                "safetyScore": 97
            },
            "visualOutput": {
                "colorPreview": "#fdf6e3",
                "textureDescription": "Clear gel that spreads easily"
            },
            "costAnalysis": {
                "totalProductionCost": 12.5,
                "costPerUnit": 1.25,
                "recommendedRetailPrice": 18,
                "profitMargin": 55
            },
            "suggestions": ["Add panthenol"],
            "safetyNotes": []
        })
        .to_string()
    }

    #[test]
    fn test_prompt_lists_ingredients_in_order() {
        let water = Ingredient::new("ing_2", "Water", 80.0, Unit::Millilitres, Category::Solvent);
        let prompt = build_prompt(&[glycerin(), water]);
        assert!(prompt.contains("Ingredients: Glycerin (5%) - Humectant, Water (80ml) - Solvent\n"));
        assert!(prompt.contains("\"safetyScore\""));
    }

    #[test]
    fn test_parse_reply_accepts_fenced_json() {
        let fenced = format!("Here you go:\n```json\n{}\n```", reply_json());
        let result = parse_reply(&fenced).unwrap();
        assert_eq!(result.properties.texture, "Silky gel");
        assert_eq!(result.suggestions, vec!["Add panthenol".to_string()]);
    }

    #[test]
    fn test_parse_reply_rejects_bad_shapes() {
        assert!(matches!(
            parse_reply("I cannot help with that"),
            Err(AnalysisFailure::ResponseShape(_))
        ));
        assert!(matches!(
            parse_reply(r#"{"properties": {}}"#),
            Err(AnalysisFailure::ResponseShape(_))
        ));

        let out_of_range = reply_json().replace("\"thickness\":3", "\"thickness\":40");
        assert!(matches!(
            parse_reply(&out_of_range),
            Err(AnalysisFailure::ResponseShape(msg)) if msg.contains("thickness")
        ));
    }

    #[test]
    fn test_fallback_is_deterministic_for_a_seed() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let a = fallback_analysis(&mut StdRng::seed_from_u64(7), today);
        let b = fallback_analysis(&mut StdRng::seed_from_u64(7), today);
        assert_eq!(a, b);
        assert_eq!(a.properties.expiry_date, NaiveDate::from_ymd_opt(2027, 3, 1).unwrap());
        assert_eq!(a.validate(), Ok(()));
    }

    #[test]
    fn test_fallback_draws_stay_in_narrow_ranges() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let r = fallback_analysis(&mut rng, today);
            let p = &r.properties;
            assert!((0.0..=99.0).contains(&p.viscosity));
            assert!((1.0..=10.0).contains(&p.thickness));
            assert!((70.0..=99.0).contains(&p.stability));
            assert!((70.0..=99.0).contains(&p.performance));
            assert!((80.0..=99.0).contains(&p.safety_score));
            assert_eq!(p.viscosity.fract(), 0.0);

            let c = &r.cost_analysis;
            assert!((10.0..=59.0).contains(&c.total_production_cost));
            assert!((2.0..=6.0).contains(&c.cost_per_unit));
            assert!((15.0..=34.0).contains(&c.recommended_retail_price));
            assert!((30.0..=69.0).contains(&c.profit_margin));
            assert_eq!(r.validate(), Ok(()));
        }
    }

    #[tokio::test]
    async fn test_analyze_uses_generated_reply() {
        let generator = Arc::new(ScriptedTextGenerator::new().reply_with(reply_json()));
        let requestor = AnalysisRequestor::new(generator.clone());

        let analysis = requestor.analyze(&[glycerin()]).await.unwrap();
        assert_eq!(analysis.source, AnalysisSource::Generated);
        assert_eq!(analysis.result.properties.viscosity, 35.0);
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_analyze_falls_back_on_malformed_reply() {
        let generator = Arc::new(ScriptedTextGenerator::new().reply_with("not json at all"));
        let requestor = AnalysisRequestor::new(generator.clone());

        let analysis = requestor.analyze(&[glycerin()]).await.unwrap();
        assert_eq!(analysis.source, AnalysisSource::Fallback);
        assert_eq!(analysis.result.properties.texture, FALLBACK_TEXTURE);
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_request_surfaces_external_failure() {
        let generator = Arc::new(ScriptedTextGenerator::new().fail_with(InferenceError::Timeout));
        let requestor = AnalysisRequestor::new(generator);

        let result = requestor.request(&[glycerin()]).await;
        assert_eq!(result, Err(AnalysisFailure::External(InferenceError::Timeout)));
    }

    #[tokio::test]
    async fn test_analyze_empty_list_makes_no_call() {
        let generator = Arc::new(ScriptedTextGenerator::new().reply_with(reply_json()));
        let requestor = AnalysisRequestor::new(generator.clone());

        assert_eq!(requestor.analyze(&[]).await, None);
        assert_eq!(generator.call_count(), 0);
    }
}
