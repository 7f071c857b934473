use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::uri::ObjectUri;

/// A visible, shareable file in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Name relative to the share folder, e.g. `a.ipynb`.
    pub name: String,
    pub remote_uri: ObjectUri,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, remote_uri: ObjectUri) -> Self {
        Self {
            name: name.into(),
            remote_uri,
        }
    }
}

/// A fetched notebook and its rendered HTML, both in the scratch directory.
///
/// Re-selecting the same entry overwrites both files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewArtifact {
    pub source_uri: ObjectUri,
    pub local_path: PathBuf,
    pub rendered_path: PathBuf,
}
