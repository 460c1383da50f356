//! List Item Component
//!
//! Individual row in the packing list.

use leptos::prelude::*;

use crate::models::Item;
use crate::store::{store_remove_item, store_toggle_packed, use_app_store};

/// A single item row
#[component]
pub fn ListItem(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let packed = item.packed;
    let label = format!("{} {}", item.quantity, item.description);

    view! {
        <li class=move || if packed { "item-row packed" } else { "item-row" }>
            <input
                type="checkbox"
                checked=packed
                on:change=move |_| store_toggle_packed(&store, id)
            />
            <span style=if packed { "text-decoration: line-through;" } else { "" }>
                {label}
            </span>
            <button class="delete-btn" on:click=move |_| store_remove_item(&store, id)>
                "×"
            </button>
        </li>
    }
}
