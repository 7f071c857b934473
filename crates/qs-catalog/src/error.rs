use std::path::PathBuf;

use qs_core::ObjectUri;
use qs_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Listing failed or came back malformed.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(#[source] StoreError),

    #[error("failed to move {from} to {to}: {source}")]
    ObjectMoveFailed {
        from: ObjectUri,
        to: ObjectUri,
        #[source]
        source: StoreError,
    },

    #[error("failed to upload {}: {source}", path.display())]
    UploadFailed {
        path: PathBuf,
        #[source]
        source: StoreError,
    },

    #[error("'{0}' is already hidden")]
    AlreadyHidden(String),

    /// Uploading a marker-prefixed name would land it straight in hiding.
    #[error("'{name}' starts with the hidden marker '{marker}'")]
    HiddenName { name: String, marker: String },

    #[error("'{name}' does not end with {extension}")]
    ExtensionMismatch { name: String, extension: String },

    /// Selections are flat names inside the share folder.
    #[error("invalid catalog name '{0}'")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
