//! Error Line Component

use leptos::prelude::*;

use crate::snapshot::FormView;

/// The single red message under the form, hidden when there is no error
#[component]
pub fn ErrorLine(form: Memo<FormView>) -> impl IntoView {
    move || {
        form.with(|f| f.error.clone())
            .map(|message| view! { <p class="form-error">{message}</p> })
    }
}
