//! Search box handler.

use super::MessageHandler;
use crate::command::Command;
use crate::message::SearchMessage;
use crate::state::AppState;

/// Handler for the local filter.
pub struct SearchHandler;

impl MessageHandler<SearchMessage> for SearchHandler {
    fn handle(&self, state: &mut AppState, msg: SearchMessage) -> Command {
        match msg {
            SearchMessage::Changed(text) => state.search = text,
            SearchMessage::Cleared => state.search.clear(),
        }
        Command::None
    }
}
