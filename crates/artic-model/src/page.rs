//! Page-level types: the API response envelope, the normalized page and the
//! supported page sizes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::artwork::{ArtworkRecord, RawArtwork};
use crate::error::ModelError;
use crate::ids::PageNumber;

/// `pagination` object of the collection API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Total number of records in the collection.
    pub total: u64,
    /// Records per page the server actually used.
    pub limit: u32,
    /// Absolute offset of the first record of this page.
    pub offset: u64,
    pub total_pages: u32,
    pub current_page: u32,
}

/// Full response body of `GET /artworks?page=n`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub data: Vec<RawArtwork>,
}

/// One fetched page, normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkPage {
    /// Page index that was requested.
    pub number: PageNumber,
    /// Records in API order.
    pub records: Vec<ArtworkRecord>,
    pub pagination: Pagination,
    /// Raw records dropped during normalization (no identifier).
    #[serde(default)]
    pub skipped: usize,
}

impl ArtworkPage {
    pub fn from_response(number: PageNumber, response: ApiResponse) -> Self {
        let raw_count = response.data.len();
        let records: Vec<ArtworkRecord> = response
            .data
            .into_iter()
            .filter_map(ArtworkRecord::from_raw)
            .collect();
        let skipped = raw_count - records.len();
        Self {
            number,
            records,
            pagination: response.pagination,
            skipped,
        }
    }

    /// Rows per page the server reports, falling back to `requested` when the
    /// envelope carries no limit.
    pub fn rows_per_page(&self, requested: PageSize) -> u32 {
        if self.pagination.limit > 0 {
            self.pagination.limit
        } else {
            requested.rows()
        }
    }
}

/// Rows-per-page choices offered by the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    Six,
    #[default]
    Twelve,
    TwentyFour,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Six, PageSize::Twelve, PageSize::TwentyFour];

    pub const fn rows(self) -> u32 {
        match self {
            Self::Six => 6,
            Self::Twelve => 12,
            Self::TwentyFour => 24,
        }
    }

    /// Absolute index of the first row on `page`.
    pub fn first_row(self, page: PageNumber) -> u64 {
        u64::from(page.get() - 1) * u64::from(self.rows())
    }

    /// Page that contains the row at absolute index `offset`.
    pub fn page_containing(self, offset: u64) -> PageNumber {
        let index = offset / u64::from(self.rows());
        let page = u32::try_from(index.saturating_add(1)).unwrap_or(u32::MAX);
        PageNumber::new(page).unwrap_or(PageNumber::FIRST)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = ModelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            6 => Ok(Self::Six),
            12 => Ok(Self::Twelve),
            24 => Ok(Self::TwentyFour),
            other => Err(ModelError::InvalidPageSize(other)),
        }
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.rows()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: u32) -> PageNumber {
        PageNumber::new(n).unwrap()
    }

    #[test]
    fn first_row_is_zero_based_offset() {
        assert_eq!(PageSize::Twelve.first_row(page(1)), 0);
        assert_eq!(PageSize::Twelve.first_row(page(2)), 12);
        assert_eq!(PageSize::TwentyFour.first_row(page(3)), 48);
    }

    #[test]
    fn page_containing_keeps_first_visible_row() {
        // Row 24 is the first row of page 3 at 12 rows/page.
        let offset = PageSize::Twelve.first_row(page(3));
        assert_eq!(PageSize::Six.page_containing(offset), page(5));
        assert_eq!(PageSize::TwentyFour.page_containing(offset), page(2));
    }

    #[test]
    fn unsupported_sizes_are_rejected() {
        assert_eq!(PageSize::try_from(24).unwrap(), PageSize::TwentyFour);
        assert_eq!(
            PageSize::try_from(10),
            Err(ModelError::InvalidPageSize(10))
        );
    }

    #[test]
    fn page_from_response_drops_records_without_id() {
        let response = ApiResponse {
            pagination: Pagination {
                total: 2,
                limit: 12,
                offset: 0,
                total_pages: 1,
                current_page: 1,
            },
            data: vec![
                RawArtwork {
                    id: Some(7),
                    ..RawArtwork::default()
                },
                RawArtwork::default(),
            ],
        };
        let page = ArtworkPage::from_response(PageNumber::FIRST, response);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.skipped, 1);
        assert_eq!(page.rows_per_page(PageSize::Six), 12);
    }

    #[test]
    fn missing_limit_falls_back_to_requested_size() {
        let page = ArtworkPage::from_response(PageNumber::FIRST, ApiResponse::default());
        assert_eq!(page.rows_per_page(PageSize::Six), 6);
    }
}
