use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PreviewConfig {
    /// Scratch directory for fetched and rendered artifacts.
    /// Empty means the OS temp directory.
    #[serde(default)]
    pub scratch_dir: String,
}

impl PreviewConfig {
    #[must_use]
    pub fn scratch_dir(&self) -> PathBuf {
        if self.scratch_dir.trim().is_empty() {
            std::env::temp_dir()
        } else {
            PathBuf::from(&self.scratch_dir)
        }
    }
}
