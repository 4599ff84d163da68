//! Egg Log Frontend App
//!
//! Root component: provides the store and context, loads records on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{RecordForm, RecordsTable, StatusBanner};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::records_view;
use crate::store::RecordsState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(RecordsState::default());
    let ctx = AppContext::new(&config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load records on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let api = ctx.api();
            let result = records_view::load_records(&api, ctx.user_id).await;
            store.update(|state| state.apply_load(result));
        });
    });

    view! {
        <div class="app">
            <h1>"🐔 Egg Log"</h1>

            <StatusBanner />

            <RecordForm />

            <h2>"📋 Records"</h2>
            <RecordsTable />
        </div>
    }
}

/// Shown instead of the app when the startup configuration is unusable
#[component]
pub fn ConfigErrorPage(message: String) -> impl IntoView {
    view! {
        <div class="app">
            <h1>"🐔 Egg Log"</h1>
            <p class="status-banner error">"Configuration error: " {message}</p>
        </div>
    }
}
