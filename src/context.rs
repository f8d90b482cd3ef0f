//! Form Context
//!
//! Store handle plus API client, provided via Leptos Context API.
//! Components call these methods instead of touching the store directly.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpRecipeApi;
use crate::models::RecipeId;
use crate::store::{Field, FormState, FormStore};
use crate::tasks::{self, Request};

#[derive(Clone, Copy)]
pub struct FormContext {
    pub store: FormStore,
    api: StoredValue<HttpRecipeApi>,
}

impl FormContext {
    pub fn new(store: FormStore, api: HttpRecipeApi) -> Self {
        Self {
            store,
            api: StoredValue::new(api),
        }
    }

    /// Replace the list with the server's collection
    pub fn load(&self) {
        if let Some(request) = self.store.try_update(FormState::start_load) {
            self.run(request);
        }
    }

    pub fn set_field(&self, field: Field) {
        self.store.update(|state| state.set_field(field));
    }

    pub fn submit(&self) {
        let request = self.store.try_update(FormState::submit).flatten();
        if let Some(request) = request {
            self.run(request);
        }
    }

    pub fn begin_edit(&self, id: &RecipeId) {
        let result = self.store.try_update(|state| state.begin_edit(id));
        if let Some(Err(e)) = result {
            tracing::warn!(error = %e, "edit ignored");
        }
    }

    pub fn cancel_edit(&self) {
        self.store.update(FormState::cancel_edit);
    }

    pub fn delete(&self, id: RecipeId) {
        let request = self.store.try_update(|state| state.delete(&id)).flatten();
        if let Some(request) = request {
            self.run(request);
        }
    }

    /// Send a request in the background and merge its outcome when it settles
    fn run(&self, request: Request) {
        let store = self.store;
        let api = self.api.get_value();
        spawn_local(async move {
            let outcome = tasks::perform(&api, request).await;
            // The store is gone if the form unmounted meanwhile
            if store.try_update(|state| state.apply(outcome)).is_none() {
                tracing::debug!("form unmounted, response dropped");
            }
        });
    }
}

/// Get the form context
pub fn use_form_context() -> FormContext {
    expect_context::<FormContext>()
}
