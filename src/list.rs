//! List Transitions
//!
//! Pure functions over the item collection. Each mutation returns a fresh
//! snapshot so views never observe a partially-updated list.

use crate::models::{Item, SortMode};

/// Append an item at the end of the collection
pub fn add_item(items: &[Item], item: Item) -> Vec<Item> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// Remove the item with the given id; identity if absent
pub fn remove_item(items: &[Item], id: u64) -> Vec<Item> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

/// Flip the packed flag of the matching item; identity if absent
pub fn toggle_packed(items: &[Item], id: u64) -> Vec<Item> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                Item {
                    packed: !item.packed,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// The empty collection
pub fn clear_items() -> Vec<Item> {
    Vec::new()
}

/// Project the collection into display order
///
/// Never mutates the stored order; sorts are stable, so ties keep their
/// relative input order.
pub fn sorted_for_display(items: &[Item], mode: SortMode) -> Vec<Item> {
    let mut view = items.to_vec();
    match mode {
        SortMode::Input => {}
        SortMode::Description => {
            view.sort_by(|a, b| {
                a.description
                    .to_lowercase()
                    .cmp(&b.description.to_lowercase())
            });
        }
        SortMode::Packed => {
            // packed first: false sorts before true
            view.sort_by_key(|item| !item.packed);
        }
    }
    view
}
