//! Selection messages.

use std::collections::BTreeSet;

use artic_model::ArtworkId;

/// Messages from the selection column, header checkbox and banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMessage {
    /// Select one artwork
    Add(ArtworkId),

    /// Deselect one artwork
    Remove(ArtworkId),

    /// Flip one artwork
    Toggle(ArtworkId),

    /// Header checkbox: select (`true`) or deselect every loaded record
    PageToggled(bool),

    /// New row selection for the displayed page
    ///
    /// Displayed ids in the set become selected, displayed ids outside it
    /// become deselected; other pages are untouched.
    RowsChanged(BTreeSet<ArtworkId>),

    /// Clear every selection and the bulk target
    Cleared,
}
