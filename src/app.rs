//! Far Away Frontend App
//!
//! Root component: owns the store and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemForm, PackingList, StatsFooter};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Item ids are seeded from the clock and bumped on every add
    let store = Store::new(AppState::new(js_sys::Date::now() as u64));
    provide_context(store);

    view! {
        <div class="app">
            <Logo />
            <AddItemForm />
            <PackingList />
            <StatsFooter />
        </div>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! { <h1>"🧳 Far Away"</h1> }
}
