//! Recipe List Component
//!
//! One row per recipe with Edit and Delete actions.

use leptos::prelude::*;

use crate::context::use_form_context;
use crate::snapshot::{FormView, RecipeRow};

#[component]
fn RecipeListRow(row: RecipeRow) -> impl IntoView {
    let ctx = use_form_context();
    let edit_id = row.id.clone();
    let delete_id = row.id.clone();

    view! {
        <li>
            <span class="recipe-label">{row.label}</span>
            <div class="button-group">
                <button class="edit-button" on:click=move |_| ctx.begin_edit(&edit_id)>
                    "Edit"
                </button>
                <button
                    class="delete-button"
                    disabled=row.deleting
                    on:click=move |_| ctx.delete(delete_id.clone())
                >
                    "Delete"
                </button>
            </div>
        </li>
    }
}

/// The displayed recipe collection, in server order
#[component]
pub fn RecipeList(form: Memo<FormView>) -> impl IntoView {
    view! {
        <ul class="recipe-list">
            <For
                each=move || form.with(|f| f.rows.clone())
                // Label and pending state in the key so an edited row re-renders
                key=|row| (row.id.clone(), row.label.clone(), row.deleting)
                children=move |row| view! { <RecipeListRow row=row /> }
            />
        </ul>
    }
}
