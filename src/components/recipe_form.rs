//! Recipe Form Component
//!
//! Draft inputs and the create/update submit button.

use leptos::prelude::*;

use crate::context::use_form_context;
use crate::snapshot::FormView;
use crate::store::Field;

/// Form for creating a recipe, or updating the one picked with Edit
#[component]
pub fn RecipeForm(form: Memo<FormView>) -> impl IntoView {
    let ctx = use_form_context();

    // Inputs are read-only while a submit is pending
    let busy = move || form.with(|f| f.submitting);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="recipe-form" on:submit=submit>
            <input
                type="text"
                placeholder="Recipe Name"
                disabled=busy
                prop:value=move || form.with(|f| f.draft.name.clone())
                on:input=move |ev| ctx.set_field(Field::Name(event_target_value(&ev)))
            />
            <input
                type="text"
                placeholder="Cuisine"
                disabled=busy
                prop:value=move || form.with(|f| f.draft.cuisine.clone())
                on:input=move |ev| ctx.set_field(Field::Cuisine(event_target_value(&ev)))
            />
            <textarea
                placeholder="Ingredients (comma separated)"
                disabled=busy
                prop:value=move || form.with(|f| f.draft.ingredients.clone())
                on:input=move |ev| ctx.set_field(Field::Ingredients(event_target_value(&ev)))
            />
            <label>
                <input
                    type="checkbox"
                    disabled=busy
                    prop:checked=move || form.with(|f| f.draft.favorite)
                    on:change=move |ev| ctx.set_field(Field::Favorite(event_target_checked(&ev)))
                />
                "Favorite"
            </label>
            <button type="submit" disabled=busy>
                {move || form.with(|f| f.submit_label)}
            </button>
            <Show when=move || form.with(|f| f.editing)>
                <button type="button" class="cancel-btn" on:click=move |_| ctx.cancel_edit()>
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
