//! "Select the first N artworks" across pages.
//!
//! Only one page is ever in memory, so the target is applied page by page as
//! pages are loaded. A page is processed at most once per target and page
//! size, since the same page number covers different rows at another size.
//! Setting a target (even the same value again) forgets which pages were
//! processed.
//! Nothing is ever deselected here: a lowered target leaves rows selected
//! under the previous one in place.

use std::collections::BTreeSet;

use artic_model::{ArtworkRecord, PageNumber};

use super::selection::SelectionMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkSelection {
    target: Option<u64>,
    /// `(page, rows_per_page)` pairs already handled for the current target.
    processed: BTreeSet<(PageNumber, u32)>,
}

impl BulkSelection {
    pub fn target(&self) -> Option<u64> {
        self.target
    }

    /// Replace the target and forget processed pages.
    pub fn set_target(&mut self, count: u64) {
        self.target = Some(count);
        self.processed.clear();
    }

    /// Drop the target entirely.
    pub fn clear(&mut self) {
        self.target = None;
        self.processed.clear();
    }

    /// Forget processed pages but keep the target, e.g. after a page size
    /// change gives page numbers a new meaning.
    pub fn reset_processed(&mut self) {
        self.processed.clear();
    }

    pub fn is_processed(&self, page: PageNumber, rows_per_page: u32) -> bool {
        self.processed.contains(&(page, rows_per_page))
    }

    /// How many leading rows of `page` fall inside the target.
    ///
    /// `None` when there is no target or the page starts at or beyond it.
    pub fn rows_to_select(
        &self,
        page: PageNumber,
        rows_per_page: u32,
        records_on_page: usize,
    ) -> Option<usize> {
        let target = self.target?;
        let offset = u64::from(page.get() - 1) * u64::from(rows_per_page);
        if offset >= target {
            return None;
        }
        let remaining = usize::try_from(target - offset).unwrap_or(usize::MAX);
        Some(remaining.min(records_on_page))
    }

    /// Apply the target to a freshly loaded (or currently displayed) page.
    ///
    /// Returns the number of rows the target covers on this page, `0` if the
    /// page was already processed or lies beyond the target.
    pub fn apply(
        &mut self,
        page: PageNumber,
        rows_per_page: u32,
        records: &[ArtworkRecord],
        selection: &mut SelectionMap,
    ) -> usize {
        if self.is_processed(page, rows_per_page) {
            return 0;
        }
        let Some(count) = self.rows_to_select(page, rows_per_page, records.len()) else {
            return 0;
        };
        for record in &records[..count] {
            selection.add(record.id);
        }
        self.processed.insert((page, rows_per_page));
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artic_model::{ArtworkId, RawArtwork};

    fn page(n: u32) -> PageNumber {
        PageNumber::new(n).unwrap()
    }

    fn records(start: u64, count: u64) -> Vec<ArtworkRecord> {
        (start..start + count)
            .map(|id| {
                ArtworkRecord::from_raw(RawArtwork {
                    id: Some(id),
                    ..RawArtwork::default()
                })
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn target_fifteen_spans_two_pages_of_twelve() {
        let mut bulk = BulkSelection::default();
        let mut selection = SelectionMap::new();
        bulk.set_target(15);

        let first = records(100, 12);
        assert_eq!(bulk.apply(page(1), 12, &first, &mut selection), 12);

        let second = records(200, 12);
        assert_eq!(bulk.apply(page(2), 12, &second, &mut selection), 3);
        assert!(selection.contains(ArtworkId::new(200)));
        assert!(selection.contains(ArtworkId::new(202)));
        assert!(!selection.contains(ArtworkId::new(203)));

        let third = records(300, 12);
        assert_eq!(bulk.apply(page(3), 12, &third, &mut selection), 0);
        assert_eq!(selection.len(), 15);
    }

    #[test]
    fn processed_page_is_not_reprocessed() {
        let mut bulk = BulkSelection::default();
        let mut selection = SelectionMap::new();
        bulk.set_target(5);

        let rows = records(1, 12);
        assert_eq!(bulk.apply(page(1), 12, &rows, &mut selection), 5);

        // User deselects a row; revisiting the page must not re-add it.
        selection.remove(ArtworkId::new(1));
        assert_eq!(bulk.apply(page(1), 12, &rows, &mut selection), 0);
        assert!(!selection.contains(ArtworkId::new(1)));
    }

    #[test]
    fn same_page_number_at_another_size_is_processed_separately() {
        let mut bulk = BulkSelection::default();
        let mut selection = SelectionMap::new();
        bulk.set_target(30);

        let at_twelve = records(13, 12);
        assert_eq!(bulk.apply(page(2), 12, &at_twelve, &mut selection), 12);
        assert!(bulk.is_processed(page(2), 12));
        assert!(!bulk.is_processed(page(2), 24));

        let at_twenty_four = records(25, 24);
        assert_eq!(bulk.apply(page(2), 24, &at_twenty_four, &mut selection), 6);
        assert_eq!(selection.len(), 18);
    }

    #[test]
    fn new_target_reprocesses_and_never_deselects() {
        let mut bulk = BulkSelection::default();
        let mut selection = SelectionMap::new();
        let rows = records(1, 12);

        bulk.set_target(10);
        bulk.apply(page(1), 12, &rows, &mut selection);
        assert_eq!(selection.len(), 10);

        bulk.set_target(4);
        assert!(!bulk.is_processed(page(1), 12));
        assert_eq!(bulk.apply(page(1), 12, &rows, &mut selection), 4);
        assert_eq!(selection.len(), 10);
    }

    #[test]
    fn short_last_page_limits_selection() {
        let bulk = BulkSelection {
            target: Some(30),
            processed: BTreeSet::new(),
        };
        assert_eq!(bulk.rows_to_select(page(3), 12, 5), Some(5));
        assert_eq!(bulk.rows_to_select(page(4), 12, 12), None);
    }

    #[test]
    fn no_target_selects_nothing() {
        let mut bulk = BulkSelection::default();
        let mut selection = SelectionMap::new();
        let rows = records(1, 12);
        assert_eq!(bulk.apply(page(1), 12, &rows, &mut selection), 0);
        assert!(!bulk.is_processed(page(1), 12));
    }
}
