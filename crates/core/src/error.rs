//! Store error types.

use thiserror::Error;

/// Errors raised by the record store and catalog.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed. A missing file is not an
    /// error on read; it is treated as an empty resource.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file does not contain a valid JSON array of records.
    /// There is no repair policy; the operation fails outright.
    #[error("malformed resource file: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Attempted to delete one of the featured products (the first three
    /// catalog entries in file order).
    #[error("cannot delete featured product {0}")]
    FeaturedProduct(String),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
