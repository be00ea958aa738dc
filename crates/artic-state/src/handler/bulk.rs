//! "Select first N" handler.

use super::MessageHandler;
use crate::command::Command;
use crate::message::BulkMessage;
use crate::state::AppState;

/// Handler for the bulk selection overlay.
pub struct BulkHandler;

impl MessageHandler<BulkMessage> for BulkHandler {
    fn handle(&self, state: &mut AppState, msg: BulkMessage) -> Command {
        match msg {
            BulkMessage::InputChanged(value) => {
                state.bulk_input = value;
                Command::None
            }

            BulkMessage::Apply => {
                apply_target(state);
                Command::None
            }
        }
    }
}

fn apply_target(state: &mut AppState) {
    let Some(requested) = state.bulk_input.filter(|count| *count > 0) else {
        tracing::debug!(
            input = ?state.bulk_input,
            "Ignoring bulk selection without a positive count"
        );
        return;
    };

    let mut target = requested.unsigned_abs();
    if state.loaded && state.total_records > 0 && target > state.total_records {
        target = state.total_records;
    }

    state.bulk.set_target(target);
    let selected = apply_to_displayed_page(state);

    tracing::info!(target, selected_on_page = selected, "Bulk selection target set");
}

/// Run the bulk target against the page on screen.
fn apply_to_displayed_page(state: &mut AppState) -> usize {
    if !state.loaded {
        return 0;
    }
    let displayed = state.page;
    state.bulk.apply(
        displayed.page,
        displayed.size.rows(),
        &state.records,
        &mut state.selection,
    )
}
