//! Frontend Models
//!
//! Item and sort-mode data structures for the packing list.

use serde::{Deserialize, Serialize};

/// One packing-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub description: String,
    pub quantity: u32,
    pub packed: bool,
}

impl Item {
    /// Create a new unpacked item
    pub fn new(id: u64, description: String, quantity: u32) -> Self {
        Self {
            id,
            description,
            quantity,
            packed: false,
        }
    }
}

/// Display ordering for the packing list
///
/// Selects how items are projected for rendering; stored order is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Insertion order as stored
    #[default]
    Input,
    /// Ascending by description
    Description,
    /// Packed items first
    Packed,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Input => "input",
            SortMode::Description => "description",
            SortMode::Packed => "packed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "description" => SortMode::Description,
            "packed" => SortMode::Packed,
            _ => SortMode::Input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new(1, "Passport".to_string(), 2);
        assert_eq!(item.id, 1);
        assert_eq!(item.description, "Passport");
        assert_eq!(item.quantity, 2);
        assert!(!item.packed);
    }

    #[test]
    fn test_sort_mode_round_trip() {
        assert_eq!(SortMode::Packed.as_str(), "packed");
        assert_eq!(SortMode::from_str("description"), SortMode::Description);
        assert_eq!(SortMode::from_str("bogus"), SortMode::Input);
    }
}
