//! Shopping Item Component
//!
//! A single row in the list: purchased checkbox, display text, delete button.

use leptos::prelude::*;

use crate::models::Item;
use crate::store::{store_remove_item, store_toggle_purchased, use_app_store};

/// One shopping-list row
#[component]
pub fn ShoppingItem(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let purchased = item.purchased;
    let text = format!("{} - {} {}", item.name, item.quantity, item.unit);

    view! {
        <li class=move || if purchased { "item-row purchased" } else { "item-row" }>
            <input
                type="checkbox"
                checked=purchased
                on:change=move |_| store_toggle_purchased(&store, id)
            />

            <span class="item-text">{text}</span>

            <button class="delete-btn" on:click=move |_| {
                web_sys::console::log_1(&format!("[LIST] Deleting item #{}", id).into());
                store_remove_item(&store, id);
            }>"×"</button>
        </li>
    }
}
