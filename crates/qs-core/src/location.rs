//! The bucket/folder pair a catalog lives under.

use serde::{Deserialize, Serialize};

use crate::errors::UriError;
use crate::marker::HiddenMarker;
use crate::uri::ObjectUri;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLocation {
    pub bucket: String,
    /// Key prefix without surrounding slashes, e.g. `quickshare`.
    pub folder: String,
    /// Lower-cased extension including the dot, e.g. `.ipynb`.
    pub extension: String,
    pub marker: HiddenMarker,
}

impl ShareLocation {
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        folder: impl AsRef<str>,
        extension: impl AsRef<str>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            folder: folder.as_ref().trim_matches('/').to_string(),
            extension: extension.as_ref().to_ascii_lowercase(),
            marker: HiddenMarker::default(),
        }
    }

    #[must_use]
    pub fn with_marker(mut self, marker: HiddenMarker) -> Self {
        self.marker = marker;
        self
    }

    /// Listing prefix: `folder/`.
    #[must_use]
    pub fn prefix(&self) -> String {
        format!("{}/", self.folder)
    }

    #[must_use]
    pub fn uri_for(&self, name: &str) -> ObjectUri {
        ObjectUri::new(&self.bucket, format!("{}{name}", self.prefix()))
    }

    /// Strip the listing prefix from an object key.
    ///
    /// Returns `None` for keys outside the folder.
    #[must_use]
    pub fn name_from_key<'a>(&self, key: &'a str) -> Option<&'a str> {
        key.strip_prefix(self.folder.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
    }

    /// Accept either a full `s3://` URI or a bare name inside the folder.
    ///
    /// # Errors
    ///
    /// Returns [`UriError`] when `raw` looks like a URI but does not parse.
    pub fn resolve(&self, raw: &str) -> Result<ObjectUri, UriError> {
        if ObjectUri::is_uri(raw) {
            raw.parse()
        } else {
            Ok(self.uri_for(raw))
        }
    }
}
