//! UI Components
//!
//! Reusable Leptos components.

mod add_item_form;
mod list_item;
mod packing_list;
mod stats_footer;

pub use add_item_form::AddItemForm;
pub use list_item::ListItem;
pub use packing_list::PackingList;
pub use stats_footer::StatsFooter;
