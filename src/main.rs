//! Egg Log Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod records_view;
mod store;

use app::{App, ConfigErrorPage};
use config::AppConfig;
use leptos::prelude::*;
use tracing::{error, info, Level};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    let level = config.as_ref().map(AppConfig::level).unwrap_or(Level::INFO);
    if let Err(err) = console_logger::init_logger("egg-log", level) {
        web_sys::console::warn_1(&err.to_string().into());
    }

    match config {
        Ok(config) => {
            info!(api = %config.api_base_url, user_id = config.user_id, "starting");
            mount_to_body(move || view! { <App config=config /> });
        }
        Err(err) => {
            error!(error = %err, "invalid configuration");
            let message = err.to_string();
            mount_to_body(move || view! { <ConfigErrorPage message=message /> });
        }
    }
}
