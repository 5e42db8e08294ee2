//! Error types for the catalog browser.

use thiserror::Error;

/// Main error type for all browser operations.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// A resource ID was empty.
    #[error("{0} ID cannot be empty")]
    EmptyId(&'static str),

    /// Search query was empty.
    #[error("Search query cannot be empty")]
    EmptyQuery,

    /// The API answered with a non-success status.
    #[error("HTTP error! status: {status}{}", detail_suffix(.detail))]
    HttpStatus {
        status: u16,
        /// `detail` message from the backend error body, if any.
        detail: Option<String>,
    },

    /// Base URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// HTTP request failed.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BrowserError {
    /// HTTP status of the failed response, when the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            BrowserError::HttpStatus { status, .. } => Some(*status),
            BrowserError::RequestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(" ({})", d))
        .unwrap_or_default()
}

/// Result type alias for browser operations.
pub type Result<T> = std::result::Result<T, BrowserError>;
