//! UI Components
//!
//! Leptos components for the recipe form.

mod recipe_form;
mod recipe_list;
mod error_line;

pub use recipe_form::RecipeForm;
pub use recipe_list::RecipeList;
pub use error_line::ErrorLine;
