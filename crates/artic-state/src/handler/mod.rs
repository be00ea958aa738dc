//! Message handlers.
//!
//! Each handler implements [`MessageHandler`] for one message category and
//! [`crate::update`] dispatches to it:
//!
//! ```ignore
//! pub fn update(state: &mut AppState, message: Message) -> Command {
//!     match message {
//!         Message::Page(msg) => PageHandler.handle(state, msg),
//!         Message::Selection(msg) => SelectionHandler.handle(state, msg),
//!         // ...
//!     }
//! }
//! ```

mod bulk;
mod page;
mod search;
mod selection;

use crate::command::Command;
use crate::state::AppState;

pub use bulk::BulkHandler;
pub use page::{PageHandler, handle_page_loaded};
pub use search::SearchHandler;
pub use selection::SelectionHandler;

/// Trait for handling one category of messages.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, mutating state and returning any follow-up work.
    fn handle(&self, state: &mut AppState, msg: M) -> Command;
}
