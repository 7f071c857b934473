//! # qs-core
//!
//! Core types shared across all quickshare crates:
//! - Catalog entities (`CatalogEntry`, `PreviewArtifact`)
//! - `s3://` object URIs and the share location they resolve against
//! - The hidden-marker naming convention and extension matching
//! - The `Selection` outcome for actions that may have nothing to act on
//! - Argument-array process invocation for external tools
//! - CLI response types

pub mod entities;
pub mod errors;
pub mod location;
pub mod marker;
pub mod names;
pub mod process;
pub mod responses;
pub mod selection;
pub mod uri;

pub use entities::{CatalogEntry, PreviewArtifact};
pub use errors::{ProcessError, UriError};
pub use location::ShareLocation;
pub use marker::HiddenMarker;
pub use selection::Selection;
pub use uri::ObjectUri;
