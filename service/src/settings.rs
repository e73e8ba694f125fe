use std::time::Duration;

use crate::error::Error;

pub const CMS_BASE_URL_VAR: &str = "TEMPLE_CMS_BASE_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "TEMPLE_REQUEST_TIMEOUT_SECS";

pub const DEFAULT_CMS_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Where content is fetched from and how long a single request may take.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub cms_base_url: String,
    pub request_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cms_base_url: DEFAULT_CMS_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Load settings from the process environment. A `.env` file in the
    /// working directory (or any parent) is read first if present.
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup. Missing keys fall back to
    /// the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::SettingsError` when the timeout is not a positive number
    /// of seconds or the base URL is blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(base_url) = lookup(CMS_BASE_URL_VAR) {
            settings = settings.with_base_url(base_url)?;
        }
        if let Some(timeout) = lookup(REQUEST_TIMEOUT_VAR) {
            settings = settings.with_timeout_secs(parse_timeout(&timeout)?)?;
        }
        Ok(settings)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, Error> {
        let base_url = base_url.into();
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(Error::SettingsError(format!(
                "{} must not be empty",
                CMS_BASE_URL_VAR
            )));
        }
        self.cms_base_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_timeout_secs(mut self, seconds: u64) -> Result<Self, Error> {
        if seconds == 0 {
            return Err(Error::SettingsError(format!(
                "{} must be a positive number of seconds",
                REQUEST_TIMEOUT_VAR
            )));
        }
        self.request_timeout = Duration::from_secs(seconds);
        Ok(self)
    }
}

fn parse_timeout(value: &str) -> Result<u64, Error> {
    value.trim().parse::<u64>().map_err(|e| {
        Error::SettingsError(format!(
            "Invalid {} value '{}': {}",
            REQUEST_TIMEOUT_VAR, value, e
        ))
    })
}
