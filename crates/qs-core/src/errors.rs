//! Cross-cutting error types for quickshare.
//!
//! Service-specific errors (`StoreError`, `CatalogError`, `PreviewError`) live
//! in their own crates. Errors converge into `anyhow` only in `qs-cli`.

use thiserror::Error;

/// Failure to run an external program.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The program could not be started (missing binary, permissions).
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran and exited unsuccessfully.
    #[error("'{program}' exited with {}: {stderr}", status.map_or_else(|| String::from("signal"), |code| format!("status {code}")))]
    Failed {
        program: String,
        status: Option<i32>,
        stderr: String,
    },

    /// The program wrote something other than UTF-8 to stdout.
    #[error("'{program}' produced non-UTF-8 output")]
    InvalidUtf8 { program: String },
}

/// An object URI could not be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UriError {
    #[error("not an s3:// URI: '{0}'")]
    MissingScheme(String),

    #[error("URI has no bucket: '{0}'")]
    EmptyBucket(String),

    #[error("URI has no object key: '{0}'")]
    MissingKey(String),
}
