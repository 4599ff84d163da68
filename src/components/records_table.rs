//! Records Table Component
//!
//! One row per record in server order, keyed by record id and content.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::Record;
use crate::records_view;
use crate::store::{use_records_store, RecordsStateStoreFields};

#[component]
pub fn RecordsTable() -> impl IntoView {
    let store = use_records_store();

    view! {
        <table class="records-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Count"</th>
                    <th>"Notes"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || store.records().get()
                    key=Record::row_key
                    children=move |record| view! { <RecordRow record=record /> }
                />
            </tbody>
        </table>
        <p class="records-summary">
            {move || store.with(|state| format!("{} records, {} eggs", state.records.len(), state.total_eggs()))}
        </p>
    }
}

#[component]
fn RecordRow(record: Record) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_records_store();
    let id = record.id;

    let delete = move |_: ()| {
        spawn_local(async move {
            let api = ctx.api();
            match records_view::delete_record(&api, ctx.user_id, id).await {
                Ok(refreshed) => {
                    store.update(|state| state.apply_deleted(id, refreshed));
                    let shown = store.notice().get_untracked();
                    TimeoutFuture::new(ctx.notice_timeout_ms).await;
                    // Leave a newer notice alone
                    store.notice().update(|notice| {
                        if *notice == shown {
                            *notice = None;
                        }
                    });
                }
                Err(err) => store.update(|state| state.apply_delete_failed(id, &err)),
            }
        });
    };

    view! {
        <tr>
            <td>{record.date}</td>
            <td>{record.count}</td>
            <td>{record.notes}</td>
            <td>
                <DeleteConfirmButton label=format!("Delete record #{}", id) on_confirm=delete />
            </td>
        </tr>
    }
}
