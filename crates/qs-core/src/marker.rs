//! Hidden-marker naming convention.
//!
//! An object is hidden when its file name starts with the marker prefix.
//! Every visibility check goes through [`HiddenMarker`] so the convention can
//! be swapped for object metadata without touching callers.

use serde::{Deserialize, Serialize};

use crate::names::starts_with_ignore_case;

pub const DEFAULT_HIDDEN_MARKER: &str = "_hide_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HiddenMarker(String);

impl HiddenMarker {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `name` is hidden. Case-insensitive.
    #[must_use]
    pub fn is_hidden(&self, name: &str) -> bool {
        starts_with_ignore_case(name, &self.0)
    }

    /// The hidden form of a visible name.
    #[must_use]
    pub fn hide(&self, name: &str) -> String {
        format!("{}{name}", self.0)
    }

    /// The visible form of `name`, whether or not it already carries the marker.
    #[must_use]
    pub fn reveal<'a>(&self, name: &'a str) -> &'a str {
        if self.is_hidden(name) {
            &name[self.0.len()..]
        } else {
            name
        }
    }
}

impl Default for HiddenMarker {
    fn default() -> Self {
        Self::new(DEFAULT_HIDDEN_MARKER)
    }
}
