//! Browsing state for the artwork browser.
//!
//! Elm-style core: front ends send [`Message`]s, [`update`] mutates
//! [`AppState`] and returns a [`Command`] describing any fetch to run. The
//! crate does no I/O of its own.

pub mod command;
pub mod filter;
pub mod handler;
pub mod message;
pub mod state;
pub mod store;
pub mod update;

pub use command::{Command, RequestId};
pub use filter::{filter_records, filter_refs};
pub use message::{BulkMessage, Message, PageMessage, SearchMessage, SelectionMessage};
pub use state::{AppState, BulkSelection, RowView, SelectionMap, TableView};
pub use store::{Store, SubscriptionId};
pub use update::update;
