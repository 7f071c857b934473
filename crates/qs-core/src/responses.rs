//! CLI response types returned by `qs` commands.
//!
//! Mutating commands carry the refreshed listing so the caller sees the
//! catalog as it stands after the change.

use std::path::PathBuf;

use serde::Serialize;

use crate::entities::CatalogEntry;
use crate::uri::ObjectUri;

/// Response from `qs list`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ListResponse {
    pub bucket: String,
    pub folder: String,
    pub entries: Vec<CatalogEntry>,
    pub total: usize,
}

impl ListResponse {
    #[must_use]
    pub fn new(bucket: &str, folder: &str, entries: Vec<CatalogEntry>) -> Self {
        Self {
            bucket: bucket.to_string(),
            folder: folder.to_string(),
            total: entries.len(),
            entries,
        }
    }
}

/// Response from `qs hide` and `qs unhide`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VisibilityResponse {
    pub name: String,
    pub moved_to: ObjectUri,
    pub message: String,
    pub entries: Vec<CatalogEntry>,
}

/// Response from `qs upload`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UploadResponse {
    pub local_path: PathBuf,
    pub uploaded: ObjectUri,
    pub message: String,
    pub entries: Vec<CatalogEntry>,
}

/// Response from `qs local`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CandidatesResponse {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Response from `qs copy`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CopyResponse {
    pub source: ObjectUri,
    pub copied_to: PathBuf,
}

/// Response from `qs preview --output FILE`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PreviewResponse {
    pub source_uri: ObjectUri,
    pub rendered_path: PathBuf,
    pub written_to: PathBuf,
    pub bytes: usize,
}

/// A benign status line, e.g. "Nothing to hide".
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
