//! Ingredient rows of a formulation draft.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of an ingredient row, unique within one draft.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(pub String);

impl IngredientId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IngredientId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Measurement unit of an ingredient quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    /// Mass, grams.
    #[default]
    #[serde(rename = "g")]
    Grams,
    /// Volume, millilitres.
    #[serde(rename = "ml")]
    Millilitres,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "ppm")]
    PartsPerMillion,
    #[serde(rename = "drops")]
    Drops,
}

impl Unit {
    pub const ALL: [Unit; 5] = [
        Unit::Grams,
        Unit::Millilitres,
        Unit::Percent,
        Unit::PartsPerMillion,
        Unit::Drops,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Unit::Grams => "g",
            Unit::Millilitres => "ml",
            Unit::Percent => "%",
            Unit::PartsPerMillion => "ppm",
            Unit::Drops => "drops",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Functional category of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Active Ingredient", alias = "Active")]
    ActiveIngredient,
    Emulsifier,
    Thickener,
    Preservative,
    Fragrance,
    Colorant,
    #[serde(rename = "pH Adjuster")]
    PhAdjuster,
    Antioxidant,
    Solvent,
    Surfactant,
    Humectant,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::ActiveIngredient,
        Category::Emulsifier,
        Category::Thickener,
        Category::Preservative,
        Category::Fragrance,
        Category::Colorant,
        Category::PhAdjuster,
        Category::Antioxidant,
        Category::Solvent,
        Category::Surfactant,
        Category::Humectant,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::ActiveIngredient => "Active Ingredient",
            Category::Emulsifier => "Emulsifier",
            Category::Thickener => "Thickener",
            Category::Preservative => "Preservative",
            Category::Fragrance => "Fragrance",
            Category::Colorant => "Colorant",
            Category::PhAdjuster => "pH Adjuster",
            Category::Antioxidant => "Antioxidant",
            Category::Solvent => "Solvent",
            Category::Surfactant => "Surfactant",
            Category::Humectant => "Humectant",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One ingredient row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    /// Never negative; see [`coerce_quantity`].
    pub quantity: f64,
    pub unit: Unit,
    pub category: Category,
    /// CAS registry number, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cas_number: Option<String>,
    pub function: String,
}

impl Ingredient {
    /// A blank row: no name, zero quantity, default unit and category.
    pub fn empty(id: IngredientId) -> Self {
        Self {
            id,
            name: String::new(),
            quantity: 0.0,
            unit: Unit::default(),
            category: Category::default(),
            cas_number: None,
            function: String::new(),
        }
    }

    /// A filled-in row.
    pub fn new(
        id: impl Into<IngredientId>,
        name: impl Into<String>,
        quantity: f64,
        unit: Unit,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity: sanitize_quantity(quantity),
            unit,
            category,
            cas_number: None,
            function: String::new(),
        }
    }

    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = function.into();
        self
    }

    /// `"<name> (<quantity><unit>) - <category>"`, the form used in analysis prompts.
    pub fn summary_line(&self) -> String {
        format!("{} ({}{}) - {}", self.name, self.quantity, self.unit, self.category)
    }
}

/// Turns raw quantity input into a quantity: anything that is not a finite,
/// non-negative number becomes `0`.
pub fn coerce_quantity(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map(sanitize_quantity).unwrap_or(0.0)
}

fn sanitize_quantity(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}
