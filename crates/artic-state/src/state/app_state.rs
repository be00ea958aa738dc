//! Application-level state.
//!
//! This module contains `AppState` which is the root of all state.

use artic_model::{ArtworkRecord, PageNumber, PageSize};

use super::bulk::BulkSelection;
use super::page_state::{LoaderState, PageState};
use super::selection::SelectionMap;
use crate::command::Command;

/// Top-level browsing state.
///
/// Everything the table shows is derived from this struct; it is only
/// mutated by [`crate::update`].
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Displayed page. Changes only once the requested page has arrived.
    pub page: PageState,
    /// Records of the displayed page, in API order.
    pub records: Vec<ArtworkRecord>,
    /// Collection size reported by the last successful fetch.
    pub total_records: u64,
    /// Page count reported by the last successful fetch.
    pub total_pages: u32,
    /// Whether any page has been loaded yet.
    pub loaded: bool,
    /// Outstanding fetch bookkeeping.
    pub loader: LoaderState,
    /// Local filter text.
    pub search: String,
    pub selection: SelectionMap,
    pub bulk: BulkSelection,
    /// Raw value of the bulk-selection input.
    pub bulk_input: Option<i64>,
    /// Most recent fetch failure, cleared by the next successful load.
    pub last_error: Option<String>,
}

impl AppState {
    /// Empty state that has not fetched anything yet.
    pub fn new(size: PageSize) -> Self {
        Self {
            page: PageState::new(PageNumber::FIRST, size),
            ..Self::default()
        }
    }

    /// Initial state plus the fetch of `page`.
    pub fn init(page: PageNumber, size: PageSize) -> (Self, Command) {
        let mut state = Self::new(size);
        let command = state.loader.begin(page, size);
        (state, command)
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    /// Page the user is heading to: the outstanding fetch if any, otherwise
    /// the displayed page.
    pub fn requested_page(&self) -> PageState {
        match self.loader.pending() {
            Some(pending) => PageState::new(pending.page, pending.size),
            None => self.page,
        }
    }

    /// Last page, once the total is known.
    pub fn last_page(&self) -> Option<PageNumber> {
        if !self.loaded {
            return None;
        }
        PageNumber::new(self.total_pages.max(1)).ok()
    }
}
