//! Records View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiError;
use crate::models::{Record, RecordId};

/// State behind the records screen with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct RecordsState {
    /// Last successfully loaded snapshot, in server order
    pub records: Vec<Record>,
    /// Raw text of the count input
    pub pending_count: String,
    /// Raw text of the date input (`YYYY-MM-DD` or empty)
    pub pending_date: String,
    pub pending_notes: String,
    /// Failure of the most recent operation, shown in the status banner
    pub last_error: Option<String>,
    /// Short-lived success message
    pub notice: Option<String>,
}

/// Type alias for the store
pub type RecordsStore = Store<RecordsState>;

/// Get the records store from context
pub fn use_records_store() -> RecordsStore {
    expect_context::<RecordsStore>()
}

impl RecordsState {
    /// Replace the snapshot on success, keep it on failure
    pub fn apply_load(&mut self, result: Result<Vec<Record>, ApiError>) {
        match result {
            Ok(records) => {
                self.records = records;
                self.last_error = None;
            }
            Err(err) => self.last_error = Some(format!("Could not load records: {}", err)),
        }
    }

    /// The write went through: clear the form before the refresh is issued.
    ///
    /// The caller shows the confirmation before calling this.
    pub fn apply_created(&mut self) {
        self.clear_pending();
        self.last_error = None;
    }

    /// A failed write keeps what the user typed
    pub fn apply_submit_failed(&mut self, err: &ApiError) {
        self.last_error = Some(format!("Could not save record: {}", err));
    }

    pub fn apply_deleted(&mut self, id: RecordId, refreshed: Result<Vec<Record>, ApiError>) {
        self.notice = Some(format!("Record #{} deleted", id));
        self.apply_load(refreshed);
    }

    pub fn apply_delete_failed(&mut self, id: RecordId, err: &ApiError) {
        self.last_error = Some(format!("Could not delete record #{}: {}", id, err));
    }

    pub fn clear_pending(&mut self) {
        self.pending_count.clear();
        self.pending_date.clear();
        self.pending_notes.clear();
    }

    /// Sum of `count` over the snapshot
    pub fn total_eggs(&self) -> i64 {
        self.records.iter().map(|r| r.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(id: RecordId, count: i64) -> Record {
        Record {
            id,
            user_id: 1,
            date: format!("2024-01-{:02}", id),
            count,
            notes: String::new(),
        }
    }

    fn status_error() -> ApiError {
        ApiError::Status { status: 500, url: "http://x/api/records/1".to_string() }
    }

    #[test]
    fn test_load_replaces_snapshot() {
        let mut state = RecordsState {
            records: vec![make_record(1, 3), make_record(2, 4)],
            last_error: Some("old".to_string()),
            ..Default::default()
        };

        state.apply_load(Ok(vec![make_record(5, 1)]));

        assert_eq!(state.records, vec![make_record(5, 1)]);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_failed_load_keeps_snapshot() {
        let mut state = RecordsState {
            records: vec![make_record(1, 3)],
            ..Default::default()
        };

        state.apply_load(Err(status_error()));

        assert_eq!(state.records, vec![make_record(1, 3)]);
        assert!(state.last_error.as_deref().unwrap().starts_with("Could not load records"));
    }

    #[test]
    fn test_failed_submit_keeps_pending_input() {
        let mut state = RecordsState {
            pending_count: "abc".to_string(),
            pending_notes: "evening".to_string(),
            ..Default::default()
        };

        state.apply_submit_failed(&status_error());

        assert_eq!(state.pending_count, "abc");
        assert_eq!(state.pending_notes, "evening");
        assert!(state.last_error.is_some());
    }

    #[test]
    fn test_deleted_sets_notice() {
        let mut state = RecordsState {
            records: vec![make_record(1, 3), make_record(2, 4)],
            ..Default::default()
        };

        state.apply_deleted(2, Ok(vec![make_record(1, 3)]));

        assert_eq!(state.records.len(), 1);
        assert_eq!(state.notice.as_deref(), Some("Record #2 deleted"));
    }

    #[test]
    fn test_total_eggs() {
        let state = RecordsState {
            records: vec![make_record(1, 3), make_record(2, 4), make_record(3, 0)],
            ..Default::default()
        };
        assert_eq!(state.total_eggs(), 7);
        assert_eq!(RecordsState::default().total_eggs(), 0);
    }
}
