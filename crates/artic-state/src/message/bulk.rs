//! Bulk selection messages.

/// Messages from the "select first N rows" overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkMessage {
    /// Number input changed; `None` when the field is empty
    InputChanged(Option<i64>),

    /// Apply the current input as the new target
    Apply,
}
