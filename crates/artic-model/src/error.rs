use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unsupported page size: {0} (expected 6, 12 or 24)")]
    InvalidPageSize(u32),
    #[error("page numbers start at 1, got {0}")]
    InvalidPageNumber(u32),
}

pub type Result<T> = std::result::Result<T, ModelError>;
