//! Data Models
//!
//! Plain data structures for the shopping list.

use serde::{Deserialize, Serialize};

/// One shopping-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: u64,
    /// Entered name, stored verbatim (not trimmed)
    pub name: String,
    /// Parsed from the quantity text field
    pub quantity: f64,
    pub unit: String,
    /// Toggled by the user, false at creation
    pub purchased: bool,
}

impl Item {
    /// Create a new unpurchased item
    pub fn new(id: u64, name: String, quantity: f64, unit: String) -> Self {
        Self {
            id,
            name,
            quantity,
            unit,
            purchased: false,
        }
    }
}
