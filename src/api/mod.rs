//! Recipe API
//!
//! The backend seam (`RecipeBackend`) and its HTTP implementation.

mod traits;
mod recipe;

pub use traits::{ApiResult, RecipeBackend};
pub use recipe::HttpRecipeApi;
