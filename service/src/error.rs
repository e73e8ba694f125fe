use std::fmt::{Display, Formatter, Result};

use http_fetcher::FetchError;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    MenuEntryNotFound(String),
    FetchError(String),
    SettingsError(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Error::MenuEntryNotFound(id) => write!(f, "Menu entry not found: {}", id),
            Error::FetchError(message) => write!(f, "Fetch error: {}", message),
            Error::SettingsError(message) => write!(f, "Settings error: {}", message),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::FetchError(err.to_string())
    }
}
