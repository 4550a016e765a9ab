//! The analysis record produced for a formulation.
//!
//! Field names follow the JSON shape requested from the text-generation service, so a
//! conforming reply deserializes straight into [`AnalysisResult`]. Deserialization only
//! checks shape; [`AnalysisResult::validate`] checks the documented ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const VISCOSITY_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const THICKNESS_RANGE: RangeInclusive<f64> = 1.0..=10.0;
/// Range shared by stability, performance and safety score.
pub const SCORE_RANGE: RangeInclusive<f64> = 0.0..=100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductProperties {
    pub viscosity: f64,
    /// `#rrggbb`
    pub color: String,
    pub texture: String,
    pub thickness: f64,
    pub expiry_date: NaiveDate,
    pub stability: f64,
    pub performance: f64,
    pub safety_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualOutput {
    /// `#rrggbb`
    pub color_preview: String,
    pub texture_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostAnalysis {
    pub total_production_cost: f64,
    pub cost_per_unit: f64,
    pub recommended_retail_price: f64,
    /// Percent.
    pub profit_margin: f64,
}

/// Complete outcome of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub properties: ProductProperties,
    pub visual_output: VisualOutput,
    pub cost_analysis: CostAnalysis,
    pub suggestions: Vec<String>,
    pub safety_notes: Vec<String>,
}

impl AnalysisResult {
    /// Checks every documented range and format. Returns the first violation.
    pub fn validate(&self) -> Result<(), String> {
        validate_parts(&self.properties, &self.visual_output, &self.cost_analysis)
    }
}

/// The analysis subfields a project stores. Present together or not at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnalysis {
    pub properties: ProductProperties,
    pub visual_output: VisualOutput,
    pub cost_analysis: CostAnalysis,
}

impl From<&AnalysisResult> for ProjectAnalysis {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            properties: result.properties.clone(),
            visual_output: result.visual_output.clone(),
            cost_analysis: result.cost_analysis.clone(),
        }
    }
}

impl ProjectAnalysis {
    pub fn validate(&self) -> Result<(), String> {
        validate_parts(&self.properties, &self.visual_output, &self.cost_analysis)
    }
}

fn validate_parts(
    p: &ProductProperties,
    visual: &VisualOutput,
    c: &CostAnalysis,
) -> Result<(), String> {
    check_range("properties.viscosity", p.viscosity, &VISCOSITY_RANGE)?;
    check_range("properties.thickness", p.thickness, &THICKNESS_RANGE)?;
    check_range("properties.stability", p.stability, &SCORE_RANGE)?;
    check_range("properties.performance", p.performance, &SCORE_RANGE)?;
    check_range("properties.safetyScore", p.safety_score, &SCORE_RANGE)?;
    check_hex("properties.color", &p.color)?;
    check_hex("visualOutput.colorPreview", &visual.color_preview)?;

    check_non_negative("costAnalysis.totalProductionCost", c.total_production_cost)?;
    check_non_negative("costAnalysis.costPerUnit", c.cost_per_unit)?;
    check_non_negative("costAnalysis.recommendedRetailPrice", c.recommended_retail_price)?;
    check_non_negative("costAnalysis.profitMargin", c.profit_margin)?;
    Ok(())
}

/// `#` followed by exactly six hex digits.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

fn check_range(field: &str, value: f64, range: &RangeInclusive<f64>) -> Result<(), String> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "{field} = {value} outside {}..={}",
            range.start(),
            range.end()
        ))
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{field} = {value} must be a non-negative number"))
    }
}

fn check_hex(field: &str, value: &str) -> Result<(), String> {
    if is_hex_color(value) {
        Ok(())
    } else {
        Err(format!("{field} = {value:?} is not a #rrggbb colour"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            properties: ProductProperties {
                viscosity: 42.0,
                color: "#F5F5DC".into(),
                texture: "Light lotion".into(),
                thickness: 4.0,
                expiry_date: NaiveDate::from_ymd_opt(2027, 10, 18).unwrap(),
                stability: 90.0,
                performance: 85.0,
                safety_score: 95.0,
            },
            visual_output: VisualOutput {
                color_preview: "#fafafa".into(),
                texture_description: "Runny, absorbs quickly".into(),
            },
            cost_analysis: CostAnalysis {
                total_production_cost: 20.0,
                cost_per_unit: 3.5,
                recommended_retail_price: 19.99,
                profit_margin: 45.0,
            },
            suggestions: vec!["Add a chelating agent".into()],
            safety_notes: vec![],
        }
    }

    #[test]
    fn test_sample_is_valid() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn test_out_of_range_values_are_reported() {
        let mut thick = sample();
        thick.properties.thickness = 0.5;
        assert!(thick.validate().unwrap_err().contains("thickness"));

        let mut runny = sample();
        runny.properties.viscosity = 15000.0;
        assert!(runny.validate().unwrap_err().contains("viscosity"));

        let mut loss = sample();
        loss.cost_analysis.profit_margin = -5.0;
        assert!(loss.validate().unwrap_err().contains("profitMargin"));
    }

    #[test]
    fn test_hex_colors() {
        assert!(is_hex_color("#a1B2c3"));
        assert!(!is_hex_color("a1b2c3"));
        assert!(!is_hex_color("#fff"));
        assert!(!is_hex_color("#gggggg"));
    }

    #[test]
    fn test_expiry_date_wire_format() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["properties"]["expiryDate"], "2027-10-18");
        assert_eq!(json["costAnalysis"]["profitMargin"], 45.0);
    }
}
