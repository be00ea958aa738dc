//! Read-only projection of [`AppState`] for rendering.
//!
//! Front ends render a [`TableView`] and never reach into `AppState`
//! directly, so the filter and the selection intersection are computed in one
//! place.

use artic_model::{ArtworkRecord, PageNumber, PageSize};

use super::app_state::AppState;
use crate::filter::filter_records;

/// One visible row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView<'a> {
    /// 1-based position among the visible (filtered) rows.
    pub position: usize,
    pub record: &'a ArtworkRecord,
    pub selected: bool,
}

/// Everything a table front end needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    pub rows: Vec<RowView<'a>>,
    pub page: PageNumber,
    pub page_size: PageSize,
    pub total_pages: u32,
    pub total_records: u64,
    pub loading: bool,
    /// Header checkbox: every loaded record is selected.
    pub all_selected: bool,
    /// Selected ids across all pages.
    pub selected_count: usize,
    /// Selected records on the loaded page (filtered or not).
    pub selected_on_page: usize,
    pub search: &'a str,
    pub bulk_target: Option<u64>,
    pub last_error: Option<&'a str>,
}

impl<'a> TableView<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        let rows = filter_records(&state.records, &state.search)
            .into_iter()
            .enumerate()
            .map(|(index, record)| RowView {
                position: index + 1,
                record,
                selected: state.selection.contains(record.id),
            })
            .collect();

        Self {
            rows,
            page: state.page.page,
            page_size: state.page.size,
            total_pages: state.total_pages,
            total_records: state.total_records,
            loading: state.is_loading(),
            all_selected: state.selection.all_selected(&state.records),
            selected_count: state.selection.len(),
            selected_on_page: state.selection.selected_on_page(&state.records).len(),
            search: &state.search,
            bulk_target: state.bulk.target(),
            last_error: state.last_error.as_deref(),
        }
    }

    /// 1-based absolute range of the page: `(first, last)`.
    pub fn showing_range(&self) -> (u64, u64) {
        if self.total_records == 0 {
            return (0, 0);
        }
        let offset = self.page_size.first_row(self.page);
        let first = (offset + 1).min(self.total_records);
        let last = (offset + u64::from(self.page_size.rows())).min(self.total_records);
        (first, last)
    }

    /// Pager report, e.g. `Showing 13 to 24 of 129884 entries`.
    pub fn report(&self) -> String {
        let (first, last) = self.showing_range();
        format!(
            "Showing {first} to {last} of {} entries",
            self.total_records
        )
    }

    /// Selection banner, hidden (`None`) while nothing is selected.
    pub fn banner(&self) -> Option<String> {
        if self.selected_count == 0 {
            return None;
        }
        Some(format!(
            "{} of {} artworks selected",
            self.selected_count, self.total_records
        ))
    }
}
