//! API Layer - Core Traits
//!
//! Abstract interface to the recipe service.
//! The HTTP client implements it; tests use an in-memory fake.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{Recipe, RecipeId, RecipePayload};

pub type ApiResult<T> = Result<T, ApiError>;

/// CRUD operations on the remote recipe collection
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait RecipeBackend {
    /// Fetch the whole collection in server order
    async fn list(&self) -> ApiResult<Vec<Recipe>>;

    /// Create a recipe; the server assigns the id
    async fn create(&self, payload: &RecipePayload) -> ApiResult<Recipe>;

    /// Replace the editable fields of an existing recipe
    async fn update(&self, id: &RecipeId, payload: &RecipePayload) -> ApiResult<Recipe>;

    /// Delete a recipe; the response body is ignored
    async fn delete(&self, id: &RecipeId) -> ApiResult<()>;
}
