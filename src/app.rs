//! Shopping List App
//!
//! Main application component.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemForm, CompletionBanner, ItemList};
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());

    // Provide the store to all children
    provide_context(store);

    view! {
        <div class="card">
            <div class="card-header">
                <h1>"Shopping List"</h1>
            </div>

            <AddItemForm/>

            <ItemList/>

            <CompletionBanner/>

            <p class="item-count">
                {move || format!("{} items", store.list().get().items.len())}
            </p>
        </div>
    }
}
