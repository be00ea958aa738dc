//! Search box messages.

/// Messages from the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMessage {
    /// Search text changed
    Changed(String),

    /// Clear search
    Cleared,
}
