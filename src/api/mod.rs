//! Records API
//!
//! Client side of the remote records service, organized by concern:
//! the `RecordsApi` seam the view talks to, and its HTTP implementation.

mod records;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CreatedRecord, NewRecord, Record, RecordId, UserId};

pub use records::HttpRecordsApi;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server answered {status} for {url}")]
    Status { status: u16, url: String },
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Operations the records view needs from the backend.
///
/// Futures are `?Send`: browser fetch futures cannot leave the UI thread.
#[async_trait(?Send)]
pub trait RecordsApi {
    /// Every record owned by `user_id`, in server order
    async fn list_records(&self, user_id: UserId) -> ApiResult<Vec<Record>>;

    /// Store one record and return its server-assigned id
    async fn create_record(&self, record: &NewRecord) -> ApiResult<CreatedRecord>;

    async fn delete_record(&self, id: RecordId) -> ApiResult<()>;
}
