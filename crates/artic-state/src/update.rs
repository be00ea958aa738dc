//! Reducer.

use crate::command::Command;
use crate::handler::{
    BulkHandler, MessageHandler, PageHandler, SearchHandler, SelectionHandler, handle_page_loaded,
};
use crate::message::Message;
use crate::state::AppState;

/// Apply `message` to `state`.
///
/// This is the only place browsing state changes. It never blocks and never
/// performs I/O; fetches come back as [`Command::FetchPage`].
pub fn update(state: &mut AppState, message: Message) -> Command {
    match message {
        Message::Page(msg) => PageHandler.handle(state, msg),
        Message::Selection(msg) => SelectionHandler.handle(state, msg),
        Message::Search(msg) => SearchHandler.handle(state, msg),
        Message::Bulk(msg) => BulkHandler.handle(state, msg),

        Message::DismissError => {
            state.last_error = None;
            Command::None
        }

        Message::PageLoaded { request, result } => handle_page_loaded(state, request, result),
    }
}
