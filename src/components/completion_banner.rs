//! Completion Banner Component
//!
//! Shown only while the list is non-empty and fully purchased.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Banner for the all-purchased state
#[component]
pub fn CompletionBanner() -> impl IntoView {
    let store = use_app_store();

    let all_purchased = move || store.list().get().all_purchased();

    view! {
        <Show when=all_purchased>
            <p class="completion-banner">"All items have been purchased!"</p>
        </Show>
    }
}
