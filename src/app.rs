//! Recipe Box App
//!
//! Owns the form store and loads the collection once on mount.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpRecipeApi;
use crate::components::{ErrorLine, RecipeForm, RecipeList};
use crate::context::FormContext;
use crate::snapshot::FormView;
use crate::store::FormState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(FormState::new());
    let ctx = FormContext::new(store, HttpRecipeApi::default());
    provide_context(ctx);

    // Reads nothing reactive, so this runs exactly once
    Effect::new(move |_| ctx.load());

    let form = Memo::new(move |_| store.with(FormView::of));

    view! {
        <div class="recipe-form-container">
            <RecipeForm form=form />
            <ErrorLine form=form />
            <RecipeList form=form />
        </div>
    }
}
