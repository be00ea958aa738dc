//! Cross-page selection.
//!
//! Membership is keyed by [`ArtworkId`] only, so an artwork stays selected
//! while its page is not loaded. Page-scoped operations take the loaded
//! records and never touch ids outside them.

use std::collections::BTreeSet;

use artic_model::{ArtworkId, ArtworkRecord};

/// Set of selected artwork ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionMap {
    ids: BTreeSet<ArtworkId>,
}

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the id was not selected before.
    pub fn add(&mut self, id: ArtworkId) -> bool {
        self.ids.insert(id)
    }

    /// Returns `true` if the id was selected before.
    pub fn remove(&mut self, id: ArtworkId) -> bool {
        self.ids.remove(&id)
    }

    /// Flip one id; returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: ArtworkId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.ids.iter().copied()
    }

    /// Loaded records that are selected, in page order.
    pub fn selected_on_page<'a>(&self, records: &'a [ArtworkRecord]) -> Vec<&'a ArtworkRecord> {
        records.iter().filter(|r| self.contains(r.id)).collect()
    }

    /// Header checkbox state: a non-empty page whose records are all selected.
    pub fn all_selected(&self, records: &[ArtworkRecord]) -> bool {
        !records.is_empty() && records.iter().all(|r| self.contains(r.id))
    }

    /// Select or deselect every record of the page.
    pub fn set_page(&mut self, records: &[ArtworkRecord], selected: bool) {
        for record in records {
            if selected {
                self.ids.insert(record.id);
            } else {
                self.ids.remove(&record.id);
            }
        }
    }

    /// Make the displayed page's membership match `selected`.
    ///
    /// Displayed ids in `selected` are added, displayed ids missing from it are
    /// removed. Ids in `selected` that are not displayed are ignored.
    pub fn reconcile(&mut self, displayed: &[ArtworkRecord], selected: &BTreeSet<ArtworkId>) {
        for record in displayed {
            if selected.contains(&record.id) {
                self.ids.insert(record.id);
            } else {
                self.ids.remove(&record.id);
            }
        }
    }
}

impl FromIterator<ArtworkId> for SelectionMap {
    fn from_iter<I: IntoIterator<Item = ArtworkId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
