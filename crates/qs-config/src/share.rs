//! Share location configuration: which bucket/folder is the catalog.

use qs_core::marker::DEFAULT_HIDDEN_MARKER;
use qs_core::{HiddenMarker, ShareLocation};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_bucket() -> String {
    String::from("dsml-chrisi-bucket")
}

fn default_folder() -> String {
    String::from("quickshare")
}

fn default_extension() -> String {
    String::from(".ipynb")
}

fn default_hidden_marker() -> String {
    String::from(DEFAULT_HIDDEN_MARKER)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShareConfig {
    /// Target storage bucket.
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// Key prefix acting as the catalog root.
    #[serde(default = "default_folder")]
    pub folder: String,

    /// Case-insensitive suffix defining catalog members.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// File name prefix marking an object as hidden.
    #[serde(default = "default_hidden_marker")]
    pub hidden_marker: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            folder: default_folder(),
            extension: default_extension(),
            hidden_marker: default_hidden_marker(),
        }
    }
}

/// Values given on the command line. `None` keeps the loaded value.
#[derive(Debug, Clone, Default)]
pub struct ShareOverrides {
    pub bucket: Option<String>,
    pub folder: Option<String>,
    pub extension: Option<String>,
}

impl ShareConfig {
    pub(crate) fn apply(&mut self, overrides: &ShareOverrides) {
        if let Some(bucket) = &overrides.bucket {
            self.bucket.clone_from(bucket);
        }
        if let Some(folder) = &overrides.folder {
            self.folder.clone_from(folder);
        }
        if let Some(extension) = &overrides.extension {
            self.extension.clone_from(extension);
        }
    }

    pub(crate) fn validated(mut self) -> Result<Self, ConfigError> {
        self.bucket = self.bucket.trim().to_string();
        self.folder = self.folder.trim().trim_matches('/').to_string();
        self.extension = self.extension.trim().to_ascii_lowercase();

        if self.bucket.is_empty() {
            return Err(ConfigError::invalid("share.bucket", "must not be empty"));
        }
        if self.bucket.contains('/') {
            return Err(ConfigError::invalid("share.bucket", "must not contain '/'"));
        }
        if self.folder.is_empty() {
            return Err(ConfigError::invalid("share.folder", "must not be empty"));
        }
        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            return Err(ConfigError::invalid(
                "share.extension",
                "must start with '.' followed by a suffix",
            ));
        }
        if self.hidden_marker.is_empty() || self.hidden_marker.contains('/') {
            return Err(ConfigError::invalid(
                "share.hidden_marker",
                "must be a non-empty file name prefix",
            ));
        }

        Ok(self)
    }

    /// The catalog location this config describes.
    #[must_use]
    pub fn location(&self) -> ShareLocation {
        ShareLocation::new(&self.bucket, &self.folder, &self.extension)
            .with_marker(HiddenMarker::new(&self.hidden_marker))
    }
}
