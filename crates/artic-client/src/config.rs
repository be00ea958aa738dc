//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Artworks collection endpoint of the public API.
pub const DEFAULT_ENDPOINT: &str = "https://api.artic.edu/api/v1/artworks";

/// HTTP request timeout when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fields the table displays; sent as `fields=` to keep payloads small.
pub const DISPLAY_FIELDS: [&str; 7] = [
    "id",
    "title",
    "place_of_origin",
    "artist_display",
    "inscriptions",
    "date_start",
    "date_end",
];

/// Settings for [`crate::ArticClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Collection endpoint; `page`, `limit` and `fields` are appended.
    pub endpoint: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Overrides the default `User-Agent`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Ask the API for the displayed fields only.
    pub request_display_fields: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            request_display_fields: true,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Request timeout; a zero setting is treated as the default.
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_secs(self.timeout_secs)
        }
    }
}
