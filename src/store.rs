//! Global Application State Store
//!
//! Uses Leptos reactive_stores for reactivity. Each helper computes the next
//! list state via a pure transition and replaces the stored one in a single
//! write, so every handler is atomic from the view's perspective.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list::{ListState, ValidationError};

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The committed shopping list
    pub list: ListState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            list: ListState::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Validate the form fields and append a new item to the list
pub fn store_submit_entry(
    store: &AppStore,
    name: &str,
    quantity: &str,
    unit: &str,
) -> Result<(), ValidationError> {
    let next = store.list().get_untracked().submit(name, quantity, unit)?;
    store.list().set(next);
    Ok(())
}

/// Flip the purchased flag on an item by id
pub fn store_toggle_purchased(store: &AppStore, id: u64) {
    let next = store.list().get_untracked().toggle_purchased(id);
    store.list().set(next);
}

/// Remove an item from the list by id
pub fn store_remove_item(store: &AppStore, id: u64) {
    let next = store.list().get_untracked().delete(id);
    store.list().set(next);
}
