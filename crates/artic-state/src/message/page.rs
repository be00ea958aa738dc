//! Pagination messages.

use artic_model::PageSize;

/// Messages from the paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMessage {
    /// Jump to a 1-based page; `0` and pages past the end are ignored
    GoTo(u32),

    /// Next page
    Next,

    /// Previous page
    Previous,

    /// First page
    First,

    /// Last known page
    Last,

    /// Rows-per-page dropdown changed
    SizeChanged(PageSize),

    /// Fetch the displayed page again
    Reload,
}
