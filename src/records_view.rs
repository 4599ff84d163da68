//! Records View Protocol
//!
//! The network side of the records screen: initial load, submit-then-refresh
//! and delete-then-refresh. Kept free of Leptos so it runs under native tests;
//! components feed the results into [`RecordsState`](crate::store::RecordsState).

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::api::{ApiResult, RecordsApi};
use crate::models::{NewRecord, Record, RecordId, UserId};
use crate::store::RecordsState;

/// Outcome of a successful write
#[derive(Debug)]
pub struct Submitted {
    /// Id assigned by the server
    pub id: RecordId,
    /// Result of the follow-up read
    pub refreshed: ApiResult<Vec<Record>>,
}

/// Text for the blocking acknowledgment shown before the form clears
pub fn confirmation(id: RecordId) -> String {
    format!("Record added! ID: {}", id)
}

/// Today's date on the client clock
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Leading-integer parse of free text.
///
/// Skips leading whitespace, takes an optional sign and the digits that
/// follow, ignores the rest: `"5 eggs"` is 5, `"3.9"` is 3. Text without a
/// leading integer, or one that overflows `i64`, gives `None`.
pub fn parse_count(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];
    let signed = if negative { format!("-{}", digits) } else { digits.to_string() };
    signed.parse().ok()
}

/// Write-request body from the pending form fields
pub fn build_new_record(state: &RecordsState, user_id: UserId, today: NaiveDate) -> NewRecord {
    let date = if state.pending_date.is_empty() {
        today.format("%Y-%m-%d").to_string()
    } else {
        state.pending_date.clone()
    };
    NewRecord {
        user_id,
        date,
        count: parse_count(&state.pending_count),
        notes: state.pending_notes.clone(),
    }
}

/// Read the full collection for `user_id`
pub async fn load_records<A: RecordsApi + ?Sized>(api: &A, user_id: UserId) -> ApiResult<Vec<Record>> {
    match api.list_records(user_id).await {
        Ok(records) => {
            info!(user_id, count = records.len(), "records loaded");
            Ok(records)
        }
        Err(err) => {
            warn!(user_id, error = %err, "records load failed");
            Err(err)
        }
    }
}

/// Create one record, run `on_created`, then re-read the collection.
///
/// `on_created` gets the new id once the write has completed and returns
/// before the refresh is issued; the view acknowledges and clears the form
/// there. A failed write returns `Err`, skips `on_created` and issues no
/// read. A failed refresh is reported inside [`Submitted`] since the record
/// was stored.
pub async fn submit_record<A, F>(api: &A, record: &NewRecord, on_created: F) -> ApiResult<Submitted>
where
    A: RecordsApi + ?Sized,
    F: FnOnce(RecordId),
{
    let created = match api.create_record(record).await {
        Ok(created) => created,
        Err(err) => {
            warn!(user_id = record.user_id, error = %err, "record submission failed");
            return Err(err);
        }
    };
    info!(id = created.id, date = %record.date, "record created");
    on_created(created.id);

    let refreshed = load_records(api, record.user_id).await;
    Ok(Submitted { id: created.id, refreshed })
}

/// Delete one record, then re-read the collection
pub async fn delete_record<A: RecordsApi + ?Sized>(
    api: &A,
    user_id: UserId,
    id: RecordId,
) -> ApiResult<ApiResult<Vec<Record>>> {
    if let Err(err) = api.delete_record(id).await {
        warn!(id, error = %err, "record delete failed");
        return Err(err);
    }
    info!(id, "record deleted");
    Ok(load_records(api, user_id).await)
}
