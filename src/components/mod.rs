//! UI Components
//!
//! Reusable Leptos components.

mod add_item_form;
mod completion_banner;
mod item_list;
mod shopping_item;

pub use add_item_form::AddItemForm;
pub use completion_banner::CompletionBanner;
pub use item_list::ItemList;
pub use shopping_item::ShoppingItem;
