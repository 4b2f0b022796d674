//! Item List Component
//!
//! Renders the shopping list in insertion order.

use leptos::prelude::*;

use crate::components::ShoppingItem;
use crate::store::{use_app_store, AppStateStoreFields};

/// The list of shopping items
#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    let items = move || store.list().get().items;

    view! {
        <ul class="item-list">
            <For
                each=items
                // Key on the mutable fields so toggles re-render the row
                key=|item| (item.id, item.purchased)
                children=move |item| {
                    view! { <ShoppingItem item=item/> }
                }
            />
        </ul>
    }
}
