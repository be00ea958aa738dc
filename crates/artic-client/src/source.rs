//! Abstraction over where pages come from.
//!
//! The runtime only needs "give me page n at size s"; tests plug in an
//! in-memory collection instead of the HTTP client.

use std::future::Future;

use artic_model::{ArtworkPage, PageNumber, PageSize};

use crate::client::ArticClient;
use crate::error::Result;

/// A source of artwork pages.
pub trait PageSource: Send + Sync + 'static {
    /// Load one page. Implementations must not retry on their own.
    fn load_page(
        &self,
        page: PageNumber,
        size: PageSize,
    ) -> impl Future<Output = Result<ArtworkPage>> + Send;
}

impl PageSource for ArticClient {
    fn load_page(
        &self,
        page: PageNumber,
        size: PageSize,
    ) -> impl Future<Output = Result<ArtworkPage>> + Send {
        self.fetch_page(page, size)
    }
}
