//! Object store error types.

use qs_core::ProcessError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store CLI could not be run or exited unsuccessfully.
    #[error("{0}")]
    Process(#[from] ProcessError),

    /// The listing response did not have the expected shape.
    #[error("malformed object listing: {0}")]
    MalformedListing(String),

    /// The source object does not exist.
    #[error("object not found: {0}")]
    NotFound(String),

    /// Local file I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
