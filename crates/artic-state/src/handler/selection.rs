//! Selection handler.

use super::MessageHandler;
use crate::command::Command;
use crate::message::SelectionMessage;
use crate::state::AppState;

/// Handler for row, header and banner selection messages.
pub struct SelectionHandler;

impl MessageHandler<SelectionMessage> for SelectionHandler {
    fn handle(&self, state: &mut AppState, msg: SelectionMessage) -> Command {
        match msg {
            SelectionMessage::Add(id) => {
                state.selection.add(id);
            }

            SelectionMessage::Remove(id) => {
                state.selection.remove(id);
            }

            SelectionMessage::Toggle(id) => {
                state.selection.toggle(id);
            }

            SelectionMessage::PageToggled(checked) => {
                state.selection.set_page(&state.records, checked);
            }

            SelectionMessage::RowsChanged(ids) => {
                state.selection.reconcile(&state.records, &ids);
            }

            SelectionMessage::Cleared => {
                let cleared = state.selection.len();
                state.selection.clear();
                state.bulk.clear();
                tracing::info!(cleared, "Selection cleared");
            }
        }
        Command::None
    }
}
