use std::path::PathBuf;

use qs_core::{ObjectUri, ProcessError, UriError};
use qs_store::StoreError;

/// Document converter failures.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("{0}")]
    Process(#[from] ProcessError),

    /// The converter exited cleanly but the expected file is not there.
    #[error("converter produced no output at {}", .0.display())]
    NoOutput(PathBuf),

    /// A previous render could not be cleared before converting again.
    #[error("failed to remove stale output {}: {source}", path.display())]
    StaleOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error(transparent)]
    InvalidUri(#[from] UriError),

    #[error("'{name}' is not a {extension} file")]
    UnsupportedExtension { name: String, extension: String },

    #[error("failed to fetch {uri}: {source}")]
    FetchFailed {
        uri: ObjectUri,
        #[source]
        source: StoreError,
    },

    #[error("failed to convert {}: {source}", path.display())]
    ConversionFailed {
        path: PathBuf,
        #[source]
        source: ConvertError,
    },

    #[error("failed to read rendered preview {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `copy` was asked for a file that was never previewed.
    #[error("{0} has not been previewed yet; nothing to copy")]
    NotFetched(ObjectUri),

    #[error("failed to copy to {}: {source}", path.display())]
    CopyFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
