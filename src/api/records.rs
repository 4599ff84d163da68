//! HTTP Records Client
//!
//! `reqwest` bindings for the records endpoints. On wasm32 reqwest runs on
//! top of the browser `fetch`.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ApiError, ApiResult, RecordsApi};
use crate::models::{CreatedRecord, NewRecord, Record, RecordId, RecordList, UserId};

/// Records API reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpRecordsApi {
    client: Client,
    base_url: String,
}

impl HttpRecordsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET` target for one user's collection
    pub fn user_records_url(&self, user_id: UserId) -> String {
        format!("{}/records/{}", self.base_url, user_id)
    }

    /// `POST` target; the trailing slash is part of the route
    pub fn collection_url(&self) -> String {
        format!("{}/records/", self.base_url)
    }

    /// `DELETE` target for one record
    pub fn record_url(&self, id: RecordId) -> String {
        format!("{}/records/{}", self.base_url, id)
    }
}

#[async_trait(?Send)]
impl RecordsApi for HttpRecordsApi {
    async fn list_records(&self, user_id: UserId) -> ApiResult<Vec<Record>> {
        let url = self.user_records_url(user_id);
        debug!(%url, "GET records");
        let response = self.client.get(&url).send().await?;
        let list: RecordList = read_json(response, &url).await?;
        Ok(list.records)
    }

    async fn create_record(&self, record: &NewRecord) -> ApiResult<CreatedRecord> {
        let url = self.collection_url();
        debug!(%url, date = %record.date, count = ?record.count, "POST record");
        // `.json()` also sets Content-Type: application/json
        let response = self.client.post(&url).json(record).send().await?;
        read_json(response, &url).await
    }

    async fn delete_record(&self, id: RecordId) -> ApiResult<()> {
        let url = self.record_url(id);
        debug!(%url, "DELETE record");
        let response = self.client.delete(&url).send().await?;
        check_status(&response, &url)?;
        Ok(())
    }
}

fn check_status(response: &Response, url: &str) -> ApiResult<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response, url: &str) -> ApiResult<T> {
    check_status(&response, url)?;
    let body = response.text().await?;
    parse_body(&body, url)
}

fn parse_body<T: DeserializeOwned>(body: &str, url: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let api = HttpRecordsApi::new("http://localhost:8000/api/");

        assert_eq!(api.user_records_url(391566450), "http://localhost:8000/api/records/391566450");
        assert_eq!(api.collection_url(), "http://localhost:8000/api/records/");
        assert_eq!(api.record_url(17), "http://localhost:8000/api/records/17");
    }

    #[test]
    fn test_parse_body_reports_url_on_bad_json() {
        let err = parse_body::<RecordList>("<html>502</html>", "http://x/api/records/1").unwrap_err();
        match err {
            ApiError::Decode { url, .. } => assert_eq!(url, "http://x/api/records/1"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_body_requires_records_field() {
        let err = parse_body::<RecordList>(r#"{"items":[]}"#, "u").unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status { status: 422, url: "http://x/api/records/".to_string() };
        assert_eq!(err.to_string(), "server answered 422 for http://x/api/records/");
    }
}
