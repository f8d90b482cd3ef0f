//! Test Helpers
//!
//! In-memory `RecipeBackend` that behaves like the recipe service and records calls.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::api::{ApiResult, RecipeBackend};
use crate::error::ApiError;
use crate::models::{Recipe, RecipeId, RecipePayload};

pub fn recipe(id: &str, name: &str, cuisine: &str) -> Recipe {
    Recipe {
        id: RecipeId::from(id),
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        ingredients: match name {
            "Tacos" => "beef,tortilla".to_string(),
            _ => "water,salt".to_string(),
        },
        favorite: false,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(RecipePayload),
    Update(RecipeId, RecipePayload),
    Delete(RecipeId),
}

#[derive(Debug, Default)]
pub struct FakeBackend {
    recipes: RefCell<Vec<Recipe>>,
    calls: RefCell<Vec<Call>>,
    fail: Cell<bool>,
}

impl FakeBackend {
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: RefCell::new(recipes),
            ..Default::default()
        }
    }

    /// Every call fails at the transport level until `recover`
    pub fn failing() -> Self {
        let backend = Self::default();
        backend.fail.set(true);
        backend
    }

    pub fn recover(&self) {
        self.fail.set(false);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        if self.fail.get() {
            return Err(ApiError::transport("http://fake/api/", "connection refused"));
        }
        Ok(())
    }

    fn not_found(id: &RecipeId) -> ApiError {
        ApiError::Status {
            url: format!("http://fake/api/{}", id),
            status: 404,
        }
    }

    /// Ids are assigned from the running call count
    fn next_id(&self) -> RecipeId {
        let created = self
            .calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::Create(_)))
            .count();
        RecipeId::new(created.to_string())
    }
}

#[async_trait(?Send)]
impl RecipeBackend for FakeBackend {
    async fn list(&self) -> ApiResult<Vec<Recipe>> {
        self.record(Call::List)?;
        Ok(self.recipes.borrow().clone())
    }

    async fn create(&self, payload: &RecipePayload) -> ApiResult<Recipe> {
        self.record(Call::Create(payload.clone()))?;
        let created = Recipe {
            id: self.next_id(),
            name: payload.name.clone(),
            cuisine: payload.cuisine.clone(),
            ingredients: payload.ingredients.clone(),
            favorite: payload.favorite,
        };
        self.recipes.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &RecipeId, payload: &RecipePayload) -> ApiResult<Recipe> {
        self.record(Call::Update(id.clone(), payload.clone()))?;
        let mut recipes = self.recipes.borrow_mut();
        let slot = recipes
            .iter_mut()
            .find(|recipe| &recipe.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        slot.name = payload.name.clone();
        slot.cuisine = payload.cuisine.clone();
        slot.ingredients = payload.ingredients.clone();
        slot.favorite = payload.favorite;
        Ok(slot.clone())
    }

    async fn delete(&self, id: &RecipeId) -> ApiResult<()> {
        self.record(Call::Delete(id.clone()))?;
        let mut recipes = self.recipes.borrow_mut();
        let before = recipes.len();
        recipes.retain(|recipe| &recipe.id != id);
        if recipes.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
