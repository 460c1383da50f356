//! Add Item Form Component
//!
//! Form for adding new items with a bounded quantity selector.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_add_item, use_app_store};

/// Largest quantity the selector offers
const MAX_QUANTITY: u32 = 20;

/// Form for adding new items
#[component]
pub fn AddItemForm() -> impl IntoView {
    let store = use_app_store();

    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(1u32);

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = description.get();
        if text.is_empty() {
            return;
        }

        store_add_item(&store, text, quantity.get());
        set_description.set(String::new());
        set_quantity.set(1);
    };

    view! {
        <form class="add-form" on:submit=add_item>
            <h3>"What do you need for your trip?"</h3>
            <select
                prop:value=move || quantity.get().to_string()
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                    set_quantity.set(select.value().parse().unwrap_or(1));
                }
            >
                {(1..=MAX_QUANTITY).map(|n| view! {
                    <option value=n.to_string()>{n}</option>
                }).collect_view()}
            </select>
            <input
                type="text"
                placeholder="Item..."
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
