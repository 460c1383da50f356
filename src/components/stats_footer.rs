//! Stats Footer Component
//!
//! Completion summary for the whole list.

use leptos::prelude::*;

use crate::stats::packing_stats;
use crate::store::{use_app_store, AppStateStoreFields};

/// Footer summary of packing progress
#[component]
pub fn StatsFooter() -> impl IntoView {
    let store = use_app_store();

    let message = move || packing_stats(&store.items().get()).message();

    view! {
        <footer class="stats">
            <em>{message}</em>
        </footer>
    }
}
