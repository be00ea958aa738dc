//! Pagination handlers and page-load completion.

use artic_model::{ArtworkPage, PageNumber, PageSize};

use super::MessageHandler;
use crate::command::{Command, RequestId};
use crate::message::PageMessage;
use crate::state::{AppState, PageState};

/// Handler for paginator messages.
pub struct PageHandler;

impl MessageHandler<PageMessage> for PageHandler {
    fn handle(&self, state: &mut AppState, msg: PageMessage) -> Command {
        let current = state.requested_page();
        match msg {
            PageMessage::GoTo(number) => match PageNumber::new(number) {
                Ok(page) => go_to(state, page),
                Err(e) => {
                    tracing::debug!(error = %e, "Ignoring page request");
                    Command::None
                }
            },

            PageMessage::Next => go_to(state, current.page.next()),

            PageMessage::Previous => match current.page.previous() {
                Some(page) => go_to(state, page),
                None => Command::None,
            },

            PageMessage::First => go_to(state, PageNumber::FIRST),

            PageMessage::Last => match state.last_page() {
                Some(page) => go_to(state, page),
                None => Command::None,
            },

            PageMessage::SizeChanged(size) => change_size(state, size),

            PageMessage::Reload => {
                let displayed = state.page;
                tracing::debug!(page = %displayed.page, "Reloading page");
                state.loader.begin(displayed.page, displayed.size)
            }
        }
    }
}

fn go_to(state: &mut AppState, page: PageNumber) -> Command {
    if let Some(last) = state.last_page() {
        if page > last {
            tracing::debug!(page = %page, last = %last, "Ignoring page past the end");
            return Command::None;
        }
    }

    let current = state.requested_page();
    if page == current.page && (state.loaded || state.is_loading()) {
        return Command::None;
    }

    tracing::debug!(page = %page, size = %current.size, "Requesting page");
    state.loader.begin(page, current.size)
}

/// Switch rows per page, keeping the first visible row on screen.
fn change_size(state: &mut AppState, size: PageSize) -> Command {
    let current = state.requested_page();
    if size == current.size {
        return Command::None;
    }

    let page = size.page_containing(current.first_row());
    // Page numbers mean different rows now.
    state.bulk.reset_processed();

    tracing::info!(from = %current.size, to = %size, page = %page, "Page size changed");
    state.loader.begin(page, size)
}

/// Apply a finished fetch.
///
/// Responses to superseded requests are dropped. A failed fetch leaves the
/// displayed page, its records and the totals exactly as they were.
pub fn handle_page_loaded(
    state: &mut AppState,
    request: RequestId,
    result: Result<ArtworkPage, String>,
) -> Command {
    let Some(pending) = state.loader.complete(request) else {
        tracing::debug!(request = %request, "Discarding stale page response");
        return Command::None;
    };

    match result {
        Ok(page) => {
            let rows_per_page = page.rows_per_page(pending.size);
            state.page = PageState::new(pending.page, pending.size);
            state.total_records = page.pagination.total;
            state.total_pages = page.pagination.total_pages;
            state.records = page.records;
            state.loaded = true;
            state.last_error = None;

            let auto_selected = state.bulk.apply(
                pending.page,
                rows_per_page,
                &state.records,
                &mut state.selection,
            );

            tracing::info!(
                page = %pending.page,
                records = state.records.len(),
                total = state.total_records,
                auto_selected,
                "Loaded artworks page"
            );
        }
        Err(message) => {
            tracing::warn!(page = %pending.page, error = %message, "Error fetching artworks");
            state.last_error = Some(message);
        }
    }

    Command::None
}
