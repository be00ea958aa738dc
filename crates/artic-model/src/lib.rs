//! Data model for browsing the Art Institute of Chicago collection API.
//!
//! - [`artwork`]: raw and normalized artwork records
//! - [`page`]: pagination envelope, normalized pages and page sizes
//! - [`ids`]: artwork identifiers and 1-based page numbers

pub mod artwork;
pub mod error;
pub mod ids;
pub mod page;

pub use artwork::{ArtworkRecord, NO_INSCRIPTIONS, RawArtwork, UNKNOWN};
pub use error::{ModelError, Result};
pub use ids::{ArtworkId, PageNumber};
pub use page::{ApiResponse, ArtworkPage, PageSize, Pagination};
