//! Frontend Configuration
//!
//! Defaults are embedded from `config/egg-log.toml` at build time and can be
//! overridden per deployment with `<meta name="egg-log:...">` tags in the
//! host page.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

use crate::models::UserId;

const EMBEDDED_CONFIG: &str = include_str!("../config/egg-log.toml");

const META_API_BASE_URL: &str = "egg-log:api-base-url";
const META_USER_ID: &str = "egg-log:user-id";
const META_LOG_LEVEL: &str = "egg-log:log-level";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid embedded configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("api_base_url must not be empty")]
    EmptyBaseUrl,
    #[error("user id {0:?} is not an integer")]
    InvalidUserId(String),
    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Base address of the records API, without trailing slash
    pub api_base_url: String,
    /// Account whose records this client reads and writes
    pub user_id: UserId,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_notice_timeout_ms")]
    pub notice_timeout_ms: u32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_notice_timeout_ms() -> u32 {
    3000
}

/// Values read from the host page; `None` keeps the embedded default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub user_id: Option<String>,
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Build the runtime config: embedded defaults, page overrides, then
    /// origin resolution.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_toml(EMBEDDED_CONFIG)?
            .with_overrides(&ConfigOverrides::from_document())?;
        let origin = web_sys::window().and_then(|win| win.location().origin().ok());
        Ok(config.resolve_base_url(origin.as_deref()))
    }

    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(url) = &overrides.api_base_url {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(raw) = &overrides.user_id {
            self.user_id = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidUserId(raw.clone()))?;
        }
        if let Some(level) = &overrides.log_level {
            self.log_level = level.trim().to_string();
        }
        self.validate()?;
        Ok(self)
    }

    /// Make a path-only base URL absolute and drop trailing slashes.
    pub fn resolve_base_url(mut self, origin: Option<&str>) -> Self {
        let trimmed = self.api_base_url.trim_end_matches('/');
        self.api_base_url = match origin {
            Some(origin) if trimmed.starts_with('/') => {
                format!("{}{}", origin.trim_end_matches('/'), trimmed)
            }
            _ => trimmed.to_string(),
        };
        self
    }

    pub fn level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if Level::from_str(&self.log_level).is_err() {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }
}

impl ConfigOverrides {
    /// Read override meta tags from the current document
    pub fn from_document() -> Self {
        Self {
            api_base_url: meta_content(META_API_BASE_URL),
            user_id: meta_content(META_USER_ID),
            log_level: meta_content(META_LOG_LEVEL),
        }
    }
}

fn meta_content(name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.query_selector(&selector).ok().flatten())
        .and_then(|el| el.get_attribute("content"))
        .filter(|content| !content.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        api_base_url = "/api/"
        user_id = 42
    "#;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = AppConfig::from_toml(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.api_base_url, "/api");
        assert_eq!(config.level(), Level::INFO);
    }

    #[test]
    fn test_defaults_fill_optional_fields() {
        let config = AppConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.user_id, 42);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.notice_timeout_ms, 3000);
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let overrides = ConfigOverrides {
            api_base_url: Some("https://eggs.example.org/api".to_string()),
            user_id: Some(" 7 ".to_string()),
            log_level: Some("debug".to_string()),
        };
        let config = AppConfig::from_toml(SAMPLE).unwrap().with_overrides(&overrides).unwrap();

        assert_eq!(config.api_base_url, "https://eggs.example.org/api");
        assert_eq!(config.user_id, 7);
        assert_eq!(config.level(), Level::DEBUG);
    }

    #[test]
    fn test_bad_user_id_override_is_rejected() {
        let overrides = ConfigOverrides {
            user_id: Some("hens".to_string()),
            ..Default::default()
        };
        let err = AppConfig::from_toml(SAMPLE).unwrap().with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUserId(raw) if raw == "hens"));
    }

    #[test]
    fn test_bad_log_level_is_rejected() {
        let err = AppConfig::from_toml("api_base_url = \"/api\"\nuser_id = 1\nlog_level = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(_)));
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        let err = AppConfig::from_toml("api_base_url = \" \"\nuser_id = 1").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyBaseUrl));
    }

    #[test]
    fn test_relative_base_url_resolves_against_origin() {
        let config = AppConfig::from_toml(SAMPLE).unwrap().resolve_base_url(Some("http://localhost:8080/"));
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_absolute_base_url_keeps_host() {
        let overrides = ConfigOverrides {
            api_base_url: Some("http://10.0.0.5/api///".to_string()),
            ..Default::default()
        };
        let config = AppConfig::from_toml(SAMPLE)
            .unwrap()
            .with_overrides(&overrides)
            .unwrap()
            .resolve_base_url(Some("http://localhost:8080"));
        assert_eq!(config.api_base_url, "http://10.0.0.5/api");
    }
}
