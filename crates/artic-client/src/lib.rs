//! Client for the Art Institute of Chicago artworks endpoint.
//!
//! # Overview
//!
//! - [`ArticClient`] issues `GET <endpoint>?page=n&limit=size` and normalizes
//!   the response into an [`artic_model::ArtworkPage`]
//! - [`PageSource`] is the seam the browsing runtime fetches through
//! - [`ClientConfig`] is the `[client]` section of the settings file
//!
//! Requests are never retried here; a failed fetch is reported once and the
//! caller decides what to keep on screen.

pub mod client;
pub mod config;
pub mod error;
pub mod source;

pub use client::{ArticClient, parse_page};
pub use config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, DISPLAY_FIELDS};
pub use error::{ClientError, Result};
pub use source::PageSource;
