//! Render Snapshot
//!
//! Immutable view of `FormState`, the only thing components read for display.

use crate::models::RecipeId;
use crate::store::{Draft, FormState};

/// One line of the recipe list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipeRow {
    pub id: RecipeId,
    /// `"{name} - {cuisine}"`
    pub label: String,
    /// Delete already sent for this row
    pub deleting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub draft: Draft,
    pub editing: bool,
    pub submit_label: &'static str,
    pub submitting: bool,
    pub error: Option<String>,
    pub rows: Vec<RecipeRow>,
}

impl FormView {
    pub fn of(state: &FormState) -> Self {
        let editing = state.editing.is_some();
        Self {
            draft: state.draft.clone(),
            editing,
            submit_label: if editing { "Update Recipe" } else { "Add Recipe" },
            submitting: state.is_submitting(),
            error: state.error.map(|e| e.to_string()),
            rows: state
                .recipes
                .iter()
                .map(|recipe| RecipeRow {
                    id: recipe.id.clone(),
                    label: format!("{} - {}", recipe.name, recipe.cuisine),
                    deleting: state.is_deleting(&recipe.id),
                })
                .collect(),
        }
    }
}
