//! List State Machine
//!
//! Pure transition functions for the shopping list, independent of any
//! rendering layer. Each transition returns the next state; the store layer
//! replaces the current state with it in one step.

use thiserror::Error;

use crate::models::Item;

/// Rejection reasons for a form submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A field was empty or whitespace-only
    #[error("All fields are required.")]
    MissingField,
    /// The quantity text did not parse as a number
    #[error("Quantity must be a number.")]
    NonNumericQuantity,
    /// An item with the same name (case-insensitive) already exists
    #[error("Item already exists.")]
    DuplicateName,
}

/// Shopping list state: items in insertion order plus the id counter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    pub items: Vec<Item>,
    /// Next id to assign, strictly increasing across insertions
    pub next_id: u64,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Validate the raw form fields and append a new item.
    ///
    /// Checks run in order: emptiness, numeric quantity, duplicate name.
    /// The duplicate comparison uses the entered name verbatim (no trim),
    /// and the stored name is also verbatim.
    pub fn submit(&self, name: &str, quantity: &str, unit: &str) -> Result<Self, ValidationError> {
        if name.trim().is_empty() || quantity.trim().is_empty() || unit.trim().is_empty() {
            return Err(ValidationError::MissingField);
        }

        // Number() ignores surrounding whitespace, hence the trim; a literal
        // "NaN" parses in Rust but is not a usable quantity
        let quantity: f64 = quantity
            .trim()
            .parse()
            .ok()
            .filter(|q: &f64| !q.is_nan())
            .ok_or(ValidationError::NonNumericQuantity)?;

        let lower = name.to_lowercase();
        if self.items.iter().any(|item| item.name.to_lowercase() == lower) {
            return Err(ValidationError::DuplicateName);
        }

        let mut next = self.clone();
        next.items
            .push(Item::new(next.next_id, name.to_string(), quantity, unit.to_string()));
        next.next_id += 1;
        Ok(next)
    }

    /// Flip the purchased flag on the matching item; no-op for unknown ids
    pub fn toggle_purchased(&self, id: u64) -> Self {
        let mut next = self.clone();
        if let Some(item) = next.items.iter_mut().find(|item| item.id == id) {
            item.purchased = !item.purchased;
        }
        next
    }

    /// Remove the matching item, preserving the order of the rest
    pub fn delete(&self, id: u64) -> Self {
        let mut next = self.clone();
        next.items.retain(|item| item.id != id);
        next
    }

    /// True iff the list is non-empty and every item is purchased
    pub fn all_purchased(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.purchased)
    }
}
