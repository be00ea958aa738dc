//! Error types for collection API requests.

use thiserror::Error;

/// Errors that can occur while fetching a page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, timeout, connection reset).
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("collection API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        message: String,
    },

    /// The API throttled us.
    #[error("collection API rate limit exceeded, retry after {retry_after} seconds")]
    RateLimited {
        /// Seconds until the limit resets.
        retry_after: u64,
    },

    /// The body was not the expected JSON envelope.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// A configured header value is not valid HTTP.
    #[error("invalid header value: {0}")]
    InvalidHeader(String),
}

impl ClientError {
    /// Returns a short message suitable for a status line.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => {
                "Could not reach the collection API. Please check your internet connection."
            }
            Self::Api { .. } => "The collection API returned an error.",
            Self::RateLimited { .. } => "Too many requests. Please wait a moment and try again.",
            Self::JsonParse(_) => "The collection API returned an unexpected response.",
            Self::InvalidUrl(_) | Self::InvalidHeader(_) => {
                "The client is misconfigured. Check the settings file."
            }
        }
    }

    /// Returns whether the same request could succeed if issued again later.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::RateLimited { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            Self::JsonParse(_) | Self::InvalidUrl(_) | Self::InvalidHeader(_) => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
