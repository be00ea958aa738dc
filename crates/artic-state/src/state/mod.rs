//! State types.
//!
//! - [`AppState`]: root of all browsing state
//! - [`PageState`] / [`LoaderState`]: displayed page and in-flight fetch
//! - [`SelectionMap`]: cross-page selection
//! - [`BulkSelection`]: "first N" target and processed pages
//! - [`TableView`]: derived, render-ready projection

mod app_state;
mod bulk;
mod derived;
mod page_state;
mod selection;

pub use app_state::AppState;
pub use bulk::BulkSelection;
pub use derived::{RowView, TableView};
pub use page_state::{LoaderState, PageState, PendingFetch};
pub use selection::SelectionMap;
