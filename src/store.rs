//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Mutations go
//! through the pure transitions in `list` and publish a new snapshot, so
//! the single writer never exposes a half-updated collection.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list;
use crate::models::{Item, SortMode};

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All items, insertion order
    pub items: Vec<Item>,
    /// Current display ordering
    pub sort_mode: SortMode,
    /// Next item id, bumped on every add
    pub next_id: u64,
}

impl AppState {
    /// Fresh empty state with a time-derived id seed
    pub fn new(id_seed: u64) -> Self {
        Self {
            next_id: id_seed,
            ..Default::default()
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

/// Append a new unpacked item with a fresh id
pub fn store_add_item(store: &AppStore, description: String, quantity: u32) {
    let id = store.next_id().get_untracked();
    store.next_id().set(id + 1);
    let snapshot = list::add_item(
        &store.items().get_untracked(),
        Item::new(id, description, quantity),
    );
    store.items().set(snapshot);
}

/// Remove an item from the store by id
pub fn store_remove_item(store: &AppStore, id: u64) {
    let snapshot = list::remove_item(&store.items().get_untracked(), id);
    store.items().set(snapshot);
}

/// Flip the packed flag of an item by id
pub fn store_toggle_packed(store: &AppStore, id: u64) {
    let snapshot = list::toggle_packed(&store.items().get_untracked(), id);
    store.items().set(snapshot);
}

/// Drop every item
pub fn store_clear_items(store: &AppStore) {
    store.items().set(list::clear_items());
}

/// Switch the display ordering
pub fn store_set_sort_mode(store: &AppStore, mode: SortMode) {
    store.sort_mode().set(mode);
}
