//! Recipe Form State Store
//!
//! All view state lives in one `FormState` value. It only changes through the
//! methods below: user intents (`set_field`, `submit`, `begin_edit`, `delete`)
//! hand back a `Request` to run, and `apply` merges the matching `Outcome`.
//! Every request carries a `Ticket`; responses for superseded tickets are dropped.

use reactive_stores::Store;

use crate::error::{EditError, FormError};
use crate::models::{Recipe, RecipeId, RecipePayload};
use crate::tasks::{Outcome, Request};

/// Unsaved copy of the editable fields
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct Draft {
    pub name: String,
    pub cuisine: String,
    pub ingredients: String,
    pub favorite: bool,
}

impl Draft {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            cuisine: recipe.cuisine.clone(),
            ingredients: recipe.ingredients.clone(),
            favorite: recipe.favorite,
        }
    }

    /// Presence check only, values are not trimmed
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.cuisine.is_empty() && !self.ingredients.is_empty()
    }

    pub fn to_payload(&self) -> RecipePayload {
        RecipePayload {
            name: self.name.clone(),
            cuisine: self.cuisine.clone(),
            ingredients: self.ingredients.clone(),
            favorite: self.favorite,
        }
    }
}

/// A single field edit from the form
#[derive(Clone, Debug, PartialEq)]
pub enum Field {
    Name(String),
    Cuisine(String),
    Ingredients(String),
    Favorite(bool),
}

/// Generation number attached to each outgoing request
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Requests that have been issued but not answered yet
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InFlight {
    issued: u64,
    load: Option<Ticket>,
    submit: Option<Ticket>,
    /// Edit target and draft as they were when the pending submit was sent
    submitted: Option<(Option<RecipeId>, Draft)>,
    deletes: Vec<(Ticket, RecipeId)>,
}

impl InFlight {
    fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }
}

/// Whole view state of the recipe form
#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    /// Recipes in server order
    pub recipes: Vec<Recipe>,
    pub draft: Draft,
    /// Record being edited, `None` when creating
    pub editing: Option<Recipe>,
    pub error: Option<FormError>,
    pub inflight: InFlight,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.inflight.load.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.inflight.submit.is_some()
    }

    pub fn is_deleting(&self, id: &RecipeId) -> bool {
        self.inflight.deletes.iter().any(|(_, pending)| pending == id)
    }

    fn editing_id(&self) -> Option<RecipeId> {
        self.editing.as_ref().map(|recipe| recipe.id.clone())
    }

    pub fn find(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| &recipe.id == id)
    }

    /// Fetch the whole collection; a newer load supersedes an older one
    pub fn start_load(&mut self) -> Request {
        let ticket = self.inflight.issue();
        self.inflight.load = Some(ticket);
        Request::Load { ticket }
    }

    pub fn set_field(&mut self, field: Field) {
        match field {
            Field::Name(value) => self.draft.name = value,
            Field::Cuisine(value) => self.draft.cuisine = value,
            Field::Ingredients(value) => self.draft.ingredients = value,
            Field::Favorite(value) => self.draft.favorite = value,
        }
    }

    /// Validate the draft and build a create or update request.
    ///
    /// Returns `None` when validation fails (error slot set) or a submit is
    /// still in flight (nothing changes).
    pub fn submit(&mut self) -> Option<Request> {
        if self.is_submitting() {
            tracing::debug!("submit ignored, previous submit still pending");
            return None;
        }
        if !self.draft.is_complete() {
            tracing::warn!("submit rejected, required fields missing");
            self.error = Some(FormError::MissingFields);
            return None;
        }

        let ticket = self.inflight.issue();
        self.inflight.submit = Some(ticket);
        self.inflight.submitted = Some((self.editing_id(), self.draft.clone()));
        let payload = self.draft.to_payload();

        Some(match &self.editing {
            Some(target) => Request::Update {
                ticket,
                id: target.id.clone(),
                payload,
            },
            None => Request::Create { ticket, payload },
        })
    }

    /// Copy a listed recipe into the draft and mark it as the edit target
    pub fn begin_edit(&mut self, id: &RecipeId) -> Result<(), EditError> {
        let recipe = self
            .find(id)
            .cloned()
            .ok_or_else(|| EditError::NotFound(id.clone()))?;

        self.draft = Draft::from_recipe(&recipe);
        self.editing = Some(recipe);
        Ok(())
    }

    /// Leave edit mode and discard the draft
    pub fn cancel_edit(&mut self) {
        self.draft = Draft::default();
        self.editing = None;
    }

    /// Delete by id; a second delete for the same id while one is pending is ignored
    pub fn delete(&mut self, id: &RecipeId) -> Option<Request> {
        if self.is_deleting(id) {
            tracing::debug!(%id, "delete ignored, already pending");
            return None;
        }
        let ticket = self.inflight.issue();
        self.inflight.deletes.push((ticket, id.clone()));
        Some(Request::Delete {
            ticket,
            id: id.clone(),
        })
    }

    /// Merge a server response into the state
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Loaded { ticket, result } => {
                if self.inflight.load != Some(ticket) {
                    tracing::debug!(?ticket, "stale load response dropped");
                    return;
                }
                self.inflight.load = None;
                match result {
                    Ok(recipes) => {
                        tracing::info!(count = recipes.len(), "recipes loaded");
                        self.recipes = recipes;
                        self.error = None;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to fetch recipes");
                        self.error = Some(FormError::FetchFailed);
                    }
                }
            }
            Outcome::Saved { ticket, target, result } => {
                if self.inflight.submit != Some(ticket) {
                    tracing::debug!(?ticket, "stale submit response dropped");
                    return;
                }
                self.inflight.submit = None;
                let submitted = self.inflight.submitted.take();
                match result {
                    Ok(saved) => {
                        match target {
                            Some(id) => {
                                if !replace_recipe(&mut self.recipes, &id, saved) {
                                    tracing::warn!(%id, "updated recipe no longer listed");
                                }
                            }
                            None => {
                                tracing::info!(id = %saved.id, "recipe created");
                                self.recipes.push(saved);
                            }
                        }
                        // Keep work the user started while the request was out
                        let untouched = submitted.map_or(true, |(id, draft)| {
                            id == self.editing_id() && draft == self.draft
                        });
                        if untouched {
                            self.draft = Draft::default();
                            self.editing = None;
                        }
                        self.error = None;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to submit recipe");
                        self.error = Some(FormError::SubmitFailed);
                    }
                }
            }
            Outcome::Deleted { ticket, id, result } => {
                self.inflight.deletes.retain(|(pending, _)| *pending != ticket);
                match result {
                    Ok(()) => {
                        tracing::info!(%id, "recipe deleted");
                        remove_recipe(&mut self.recipes, &id);
                        if self.editing_id().as_ref() == Some(&id) {
                            self.cancel_edit();
                        }
                        self.error = None;
                    }
                    Err(e) => {
                        tracing::error!(%id, error = %e, "failed to delete recipe");
                        self.error = Some(FormError::DeleteFailed);
                    }
                }
            }
        }
    }
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

// ========================
// Store Helper Functions
// ========================

/// Replace a recipe in place by ID; false when absent
pub fn replace_recipe(recipes: &mut [Recipe], id: &RecipeId, updated: Recipe) -> bool {
    match recipes.iter_mut().find(|recipe| &recipe.id == id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove a recipe by ID
pub fn remove_recipe(recipes: &mut Vec<Recipe>, id: &RecipeId) {
    recipes.retain(|recipe| &recipe.id != id);
}
