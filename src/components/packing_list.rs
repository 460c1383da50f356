//! Packing List Component
//!
//! Sorted list view with the sort selector and the clear-all control.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::ListItem;
use crate::list::sorted_for_display;
use crate::models::SortMode;
use crate::store::{
    store_clear_items, store_set_sort_mode, use_app_store, AppStateStoreFields,
};

/// Sort mode options for the selector
const SORT_MODES: &[(SortMode, &str)] = &[
    (SortMode::Input, "Sort by input order"),
    (SortMode::Description, "Sort by description"),
    (SortMode::Packed, "Sort by packed status"),
];

/// Packing list with sort selector and clear button
#[component]
pub fn PackingList() -> impl IntoView {
    let store = use_app_store();

    let visible_items =
        move || sorted_for_display(&store.items().get(), store.sort_mode().get());

    let on_sort_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
        let mode = SortMode::from_str(&select.value());
        web_sys::console::log_1(&format!("[LIST] sort mode -> {}", mode.as_str()).into());
        store_set_sort_mode(&store, mode);
    };

    let on_clear = move |_| {
        let window = web_sys::window().expect("window should exist");
        let confirmed = window
            .confirm_with_message("Are you sure you want to delete all items?")
            .unwrap_or(false);
        if confirmed {
            store_clear_items(&store);
        }
    };

    view! {
        <div class="list">
            <ul>
                <For
                    each=visible_items
                    key=|item| {
                        // key on the mutable fields so toggles re-render the row
                        (item.id, item.packed, item.description.clone(), item.quantity)
                    }
                    children=move |item| view! { <ListItem item=item /> }
                />
            </ul>
            <div class="actions">
                <select
                    prop:value=move || store.sort_mode().get().as_str().to_string()
                    on:change=on_sort_change
                >
                    {SORT_MODES.iter().map(|(mode, label)| view! {
                        <option value=mode.as_str()>{*label}</option>
                    }).collect_view()}
                </select>
                <button on:click=on_clear>"Clear list"</button>
            </div>
        </div>
    }
}
