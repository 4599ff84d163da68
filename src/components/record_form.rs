//! Record Form Component
//!
//! Count, date and notes inputs plus the submit button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::context::use_app_context;
use crate::records_view::{self, build_new_record, confirmation, today};
use crate::store::{use_records_store, RecordsStateStoreFields};

/// Form for logging a new egg count
#[component]
pub fn RecordForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_records_store();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // No in-flight guard: every click sends its own request
        let record = store.with_untracked(|state| build_new_record(state, ctx.user_id, today()));

        spawn_local(async move {
            let api = ctx.api();
            let acknowledge = move |id| {
                // Blocks until dismissed, before the form is cleared
                let shown = web_sys::window()
                    .map(|win| win.alert_with_message(&confirmation(id)).is_ok())
                    .unwrap_or(false);
                if !shown {
                    warn!(id, "alert was not shown");
                }
                store.update(|state| state.apply_created());
            };
            match records_view::submit_record(&api, &record, acknowledge).await {
                Ok(submitted) => store.update(|state| state.apply_load(submitted.refreshed)),
                Err(err) => store.update(|state| state.apply_submit_failed(&err)),
            }
        });
    };

    view! {
        <form class="record-form" on:submit=submit>
            <input
                type="number"
                placeholder="Egg count"
                prop:value=move || store.pending_count().get()
                on:input=move |ev| store.pending_count().set(event_target_value(&ev))
            />
            <input
                type="date"
                placeholder="Date"
                prop:value=move || store.pending_date().get()
                on:input=move |ev| store.pending_date().set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Notes"
                prop:value=move || store.pending_notes().get()
                on:input=move |ev| store.pending_notes().set(event_target_value(&ev))
            />
            <button type="submit">"Add record"</button>
        </form>
    }
}
