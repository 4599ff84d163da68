//! Status Banner Component
//!
//! Shows the last failure (until dismissed or superseded) and short-lived
//! success notices.

use leptos::prelude::*;

use crate::store::{use_records_store, RecordsStateStoreFields};

#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_records_store();

    view! {
        {move || store.last_error().get().map(|message| view! {
            <div class="status-banner error" role="alert">
                <span>{message}</span>
                <button type="button" class="dismiss-btn" on:click=move |_| store.last_error().set(None)>
                    "×"
                </button>
            </div>
        })}
        {move || store.notice().get().map(|message| view! {
            <div class="status-banner notice">{message}</div>
        })}
    }
}
