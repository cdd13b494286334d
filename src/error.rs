//! Error types for the JMA observation scraper.
//!
//! Each stage of the pipeline has its own error enum so callers can decide
//! whether a failure costs a single day, a single month, or nothing at all.

use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that abort a run before any day is fetched.
///
/// Per-day and per-month failures never reach this type; they are logged and
/// skipped where they happen.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("configuration error")]
    Config(#[from] ConfigError),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable parsing failed
    #[error("failed to parse environment variables: {0}")]
    EnvParse(String),

    /// Configuration value is invalid
    #[error("invalid configuration value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// Errors raised while requesting a day page.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with something other than 200
    #[error("unexpected status code: {status}")]
    Status { status: u16 },
}

/// HTML parsing errors.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Element not found in HTML
    #[error("element not found: {selector}")]
    ElementNotFound { selector: String },

    /// Invalid CSS selector
    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// Errors raised while writing a monthly CSV file.
#[derive(Error, Debug)]
pub enum WriteError {
    /// Creating or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ConfigError {
    /// Creates a new environment parse error.
    pub fn env_parse(err: impl std::fmt::Display) -> Self {
        Self::EnvParse(err.to_string())
    }

    /// Creates a new invalid configuration error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl FetchError {
    /// Creates an error from a non-200 status.
    pub fn status(status: reqwest::StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
        }
    }
}

impl ParseError {
    /// Creates an element not found error.
    pub fn element_not_found(selector: impl Into<String>) -> Self {
        Self::ElementNotFound {
            selector: selector.into(),
        }
    }

    /// Creates an invalid selector error.
    pub fn invalid_selector(selector: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: err.to_string(),
        }
    }
}
