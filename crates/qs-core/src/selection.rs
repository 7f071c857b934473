//! Outcome of an action that may have nothing selected to act on.

use serde::Serialize;

/// `NothingSelected` is a benign "nothing to do", not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Selection<T> {
    Done(T),
    NothingSelected,
}

impl<T> Selection<T> {
    #[must_use]
    pub const fn is_nothing_selected(&self) -> bool {
        matches!(self, Self::NothingSelected)
    }

    #[must_use]
    pub fn done(self) -> Option<T> {
        match self {
            Self::Done(value) => Some(value),
            Self::NothingSelected => None,
        }
    }
}

/// Treat blank selections (`""`, `"/"`, whitespace) as no selection.
#[must_use]
pub fn selected(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty() && *value != "/")
}
