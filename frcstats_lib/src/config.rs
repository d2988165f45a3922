//! Runtime configuration read from the environment.

use std::time::Duration;

use thiserror::Error;

use tba_api::{Client, DEFAULT_APP_ID, DEFAULT_BASE_URL};

pub const BASE_URL_VAR: &str = "TBA_BASE_URL";
pub const APP_ID_VAR: &str = "TBA_APP_ID";
pub const TIMEOUT_VAR: &str = "TBA_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Where to reach the data source and how to identify ourselves to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub app_id: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: DEFAULT_APP_ID.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Reads `TBA_BASE_URL`, `TBA_APP_ID` and `TBA_TIMEOUT_SECS`, falling
    /// back to defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_VAR) {
            config = config.with_base_url(&url)?;
        }
        if let Some(app_id) = lookup(APP_ID_VAR) {
            config = config.with_app_id(&app_id)?;
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::InvalidNumber {
                    var: TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl {
                var: BASE_URL_VAR,
                value: url.to_string(),
            });
        }
        self.base_url = url.to_string();
        Ok(self)
    }

    pub fn with_app_id(mut self, app_id: &str) -> Result<Self, ConfigError> {
        let app_id = app_id.trim();
        if app_id.is_empty() {
            return Err(ConfigError::Empty { var: APP_ID_VAR });
        }
        self.app_id = app_id.to_string();
        Ok(self)
    }

    /// Builds an API client from this configuration.
    pub fn client(&self) -> Client {
        Client::with_base_url(&self.base_url)
            .with_app_id(&self.app_id)
            .with_timeout(self.timeout)
    }
}
