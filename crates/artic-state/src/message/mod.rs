//! Message module for the artwork browser.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and fetch completions flow through these types.

pub mod bulk;
pub mod page;
pub mod search;
pub mod selection;

use artic_model::ArtworkPage;

use crate::command::RequestId;

pub use bulk::BulkMessage;
pub use page::PageMessage;
pub use search::SearchMessage;
pub use selection::SelectionMessage;

/// Root message enum.
///
/// The `update` function processes these messages to modify
/// [`crate::AppState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // =========================================================================
    // User interaction
    // =========================================================================
    /// Pagination (go to, next, previous, page size)
    Page(PageMessage),

    /// Row and page selection
    Selection(SelectionMessage),

    /// Local filter input
    Search(SearchMessage),

    /// "Select first N" overlay
    Bulk(BulkMessage),

    /// Hide the last fetch error
    DismissError,

    // =========================================================================
    // Background task results
    // =========================================================================
    /// A page fetch finished
    PageLoaded {
        request: RequestId,
        result: Result<ArtworkPage, String>,
    },
}

impl From<PageMessage> for Message {
    fn from(msg: PageMessage) -> Self {
        Self::Page(msg)
    }
}

impl From<SelectionMessage> for Message {
    fn from(msg: SelectionMessage) -> Self {
        Self::Selection(msg)
    }
}

impl From<SearchMessage> for Message {
    fn from(msg: SearchMessage) -> Self {
        Self::Search(msg)
    }
}

impl From<BulkMessage> for Message {
    fn from(msg: BulkMessage) -> Self {
        Self::Bulk(msg)
    }
}
