//! Application Context
//!
//! Shared, non-reactive settings and the API client, provided via the Leptos
//! Context API.

use leptos::prelude::*;

use crate::api::HttpRecordsApi;
use crate::config::AppConfig;
use crate::models::UserId;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Account all reads and writes are scoped to
    pub user_id: UserId,
    /// How long success notices stay up
    pub notice_timeout_ms: u32,
    /// reqwest futures are `!Send` in the browser, so the client is stored locally
    api: StoredValue<HttpRecordsApi, LocalStorage>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            user_id: config.user_id,
            notice_timeout_ms: config.notice_timeout_ms,
            api: StoredValue::new_local(HttpRecordsApi::new(config.api_base_url.clone())),
        }
    }

    /// Handle to the records API (cheap clone of the shared client)
    pub fn api(&self) -> HttpRecordsApi {
        self.api.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
