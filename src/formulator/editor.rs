//! Ordered, in-memory editing of a draft's ingredient rows. No I/O.

use crate::model::{coerce_quantity, Category, Ingredient, IngredientId, Unit};
use tracing::trace;

/// A change to one field of an ingredient row.
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientUpdate {
    Name(String),
    /// Raw quantity input; see [`coerce_quantity`].
    Quantity(String),
    Unit(Unit),
    Category(Category),
    CasNumber(Option<String>),
    Function(String),
}

impl IngredientUpdate {
    fn apply(self, ingredient: &mut Ingredient) {
        match self {
            IngredientUpdate::Name(name) => ingredient.name = name,
            IngredientUpdate::Quantity(raw) => ingredient.quantity = coerce_quantity(&raw),
            IngredientUpdate::Unit(unit) => ingredient.unit = unit,
            IngredientUpdate::Category(category) => ingredient.category = category,
            IngredientUpdate::CasNumber(cas) => {
                ingredient.cas_number = cas.filter(|c| !c.trim().is_empty())
            }
            IngredientUpdate::Function(function) => ingredient.function = function,
        }
    }
}

/// The ingredient list of one formulation draft.
///
/// ```rust
/// use tyce::formulator::{IngredientListEditor, IngredientUpdate};
///
/// let mut editor = IngredientListEditor::new();
/// let id = editor.add();
/// editor.update(&id, IngredientUpdate::Name("Glycerin".into()));
/// editor.update(&id, IngredientUpdate::Quantity("5".into()));
///
/// assert_eq!(editor.ingredients()[0].quantity, 5.0);
/// assert!(editor.remove(&id));
/// assert!(editor.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct IngredientListEditor {
    ingredients: Vec<Ingredient>,
    next_id: u64,
}

impl IngredientListEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty row and returns its id. Ids are never reused within an editor.
    pub fn add(&mut self) -> IngredientId {
        self.next_id += 1;
        let id = IngredientId(format!("ing_{}", self.next_id));
        self.ingredients.push(Ingredient::empty(id.clone()));
        trace!(%id, "Ingredient added");
        id
    }

    /// Applies `update` to the row with `id`. Returns `false` when there is no such row.
    pub fn update(&mut self, id: &IngredientId, update: IngredientUpdate) -> bool {
        match self.ingredients.iter_mut().find(|ing| &ing.id == id) {
            Some(ingredient) => {
                update.apply(ingredient);
                true
            }
            None => false,
        }
    }

    /// Removes the row with `id`. Returns `false` when there is no such row.
    pub fn remove(&mut self, id: &IngredientId) -> bool {
        let before = self.ingredients.len();
        self.ingredients.retain(|ing| &ing.id != id);
        before != self.ingredients.len()
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_creates_empty_row_with_defaults() {
        let mut editor = IngredientListEditor::new();
        let id = editor.add();

        let row = &editor.ingredients()[0];
        assert_eq!(row.id, id);
        assert_eq!(row.name, "");
        assert_eq!(row.quantity, 0.0);
        assert_eq!(row.unit, Unit::Grams);
        assert_eq!(row.category, Category::ActiveIngredient);
    }

    #[test]
    fn test_ids_stay_unique_after_removal() {
        let mut editor = IngredientListEditor::new();
        let first = editor.add();
        editor.remove(&first);
        let second = editor.add();
        assert_ne!(first, second);
    }

    #[test]
    fn test_add_then_remove_restores_list() {
        let mut editor = IngredientListEditor::new();
        let keep = editor.add();
        editor.update(&keep, IngredientUpdate::Name("Water".into()));
        let before = editor.ingredients().to_vec();

        let id = editor.add();
        assert!(editor.remove(&id));
        assert_eq!(editor.ingredients(), before.as_slice());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut editor = IngredientListEditor::new();
        editor.add();
        let before = editor.ingredients().to_vec();

        let changed = editor.update(&"ing_999".into(), IngredientUpdate::Name("Ghost".into()));
        assert!(!changed);
        assert!(!editor.remove(&"ing_999".into()));
        assert_eq!(editor.ingredients(), before.as_slice());
    }

    #[test]
    fn test_update_coerces_quantity_and_keeps_order() {
        let mut editor = IngredientListEditor::new();
        let a = editor.add();
        let b = editor.add();

        editor.update(&b, IngredientUpdate::Quantity("abc".into()));
        editor.update(&a, IngredientUpdate::Quantity("-4".into()));
        editor.update(&a, IngredientUpdate::Unit(Unit::Percent));
        editor.update(&a, IngredientUpdate::CasNumber(Some("56-81-5".into())));

        let rows = editor.ingredients();
        assert_eq!(rows[0].id, a);
        assert_eq!(rows[0].quantity, 0.0);
        assert_eq!(rows[0].unit, Unit::Percent);
        assert_eq!(rows[0].cas_number.as_deref(), Some("56-81-5"));
        assert_eq!(rows[1].quantity, 0.0);
    }
}
