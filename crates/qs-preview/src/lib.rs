//! # qs-preview
//!
//! Materializes a selected remote notebook as a locally viewable HTML
//! document: fetch into the scratch directory, convert, read back.
//!
//! Every call re-fetches and re-converts; the scratch files from a previous
//! preview of the same name are overwritten, never consulted.

mod converter;
mod error;

pub use converter::{Converter, NbConvert, OutputFormat};
pub use error::{ConvertError, PreviewError};

use std::path::{Path, PathBuf};

use qs_core::names::normalize_extension;
use qs_core::selection::selected;
use qs_core::{ObjectUri, PreviewArtifact, Selection};
use qs_store::{Location, ObjectStore};

/// Shown when nothing is selected.
pub const NONE_SELECTED: &str = "None selected";

/// Result of [`PreviewService::render`]. Failures carry an empty document.
#[derive(Debug)]
pub enum Preview {
    NoneSelected,
    Rendered {
        artifact: PreviewArtifact,
        html: String,
    },
    Failed(PreviewError),
}

impl Preview {
    /// The document to display: the HTML, the "None selected" sentinel, or
    /// empty on failure.
    #[must_use]
    pub fn html(&self) -> &str {
        match self {
            Self::NoneSelected => NONE_SELECTED,
            Self::Rendered { html, .. } => html,
            Self::Failed(_) => "",
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&PreviewError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    #[must_use]
    pub const fn artifact(&self) -> Option<&PreviewArtifact> {
        match self {
            Self::Rendered { artifact, .. } => Some(artifact),
            _ => None,
        }
    }
}

pub struct PreviewService<S, C> {
    store: S,
    converter: C,
    scratch_dir: PathBuf,
    extension: String,
}

impl<S: ObjectStore, C: Converter> PreviewService<S, C> {
    pub fn new(store: S, converter: C, scratch_dir: PathBuf, extension: &str) -> Self {
        Self {
            store,
            converter,
            scratch_dir,
            extension: extension.to_ascii_lowercase(),
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn converter(&self) -> &C {
        &self.converter
    }

    /// Render the selected `s3://` URI, never returning an error directly.
    ///
    /// Callers check [`Preview::error`] or the empty [`Preview::html`].
    pub fn render(&self, selection: Option<&str>) -> Preview {
        let Some(raw) = selected(selection) else {
            return Preview::NoneSelected;
        };

        match self.render_result(raw) {
            Ok((artifact, html)) => Preview::Rendered { artifact, html },
            Err(error) => {
                tracing::warn!(uri = raw, %error, "preview failed");
                Preview::Failed(error)
            }
        }
    }

    /// Fetch, convert and read one notebook.
    ///
    /// A URI whose file name does not carry the configured extension is
    /// rejected before anything is fetched. The extension's casing is
    /// normalized for the local copy.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::InvalidUri`], [`PreviewError::UnsupportedExtension`],
    /// [`PreviewError::FetchFailed`], [`PreviewError::ConversionFailed`] or
    /// [`PreviewError::ReadFailed`].
    pub fn render_result(&self, raw_uri: &str) -> Result<(PreviewArtifact, String), PreviewError> {
        let uri: ObjectUri = raw_uri.parse()?;
        let local_path = self.local_path(&uri)?;

        std::fs::create_dir_all(&self.scratch_dir).map_err(|source| {
            PreviewError::FetchFailed {
                uri: uri.clone(),
                source: source.into(),
            }
        })?;
        self.store
            .copy(
                &Location::Remote(uri.clone()),
                &Location::Local(local_path.clone()),
            )
            .map_err(|source| PreviewError::FetchFailed {
                uri: uri.clone(),
                source,
            })?;
        tracing::debug!(%uri, path = %local_path.display(), "fetched notebook");

        let rendered_path = self
            .converter
            .convert(&local_path, OutputFormat::Html)
            .map_err(|source| PreviewError::ConversionFailed {
                path: local_path.clone(),
                source,
            })?;

        let html =
            std::fs::read_to_string(&rendered_path).map_err(|source| PreviewError::ReadFailed {
                path: rendered_path.clone(),
                source,
            })?;

        Ok((
            PreviewArtifact {
                source_uri: uri,
                local_path,
                rendered_path,
            },
            html,
        ))
    }

    /// Copy the fetched notebook for `selection` into `workdir`.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::NotFetched`] if the notebook was never
    /// previewed, [`PreviewError::CopyFailed`] if the copy fails, or a URI /
    /// extension error for a malformed selection.
    pub fn copy_to_workdir(
        &self,
        selection: Option<&str>,
        workdir: &Path,
    ) -> Result<Selection<PathBuf>, PreviewError> {
        let Some(raw) = selected(selection) else {
            return Ok(Selection::NothingSelected);
        };
        let uri: ObjectUri = raw.parse()?;
        let file_name = self.local_name(&uri)?;
        let source = self.scratch_dir.join(&file_name);
        if !source.is_file() {
            return Err(PreviewError::NotFetched(uri));
        }

        let destination = workdir.join(&file_name);
        if destination == source {
            return Ok(Selection::Done(destination));
        }
        std::fs::copy(&source, &destination).map_err(|source| PreviewError::CopyFailed {
            path: destination.clone(),
            source,
        })?;

        tracing::info!(%uri, path = %destination.display(), "copied preview to working directory");
        Ok(Selection::Done(destination))
    }

    fn local_path(&self, uri: &ObjectUri) -> Result<PathBuf, PreviewError> {
        Ok(self.scratch_dir.join(self.local_name(uri)?))
    }

    /// Same base name, extension casing normalized: `A.IPYNB` -> `A.ipynb`.
    fn local_name(&self, uri: &ObjectUri) -> Result<String, PreviewError> {
        let name = uri.file_name();
        normalize_extension(name, &self.extension).ok_or_else(|| {
            PreviewError::UnsupportedExtension {
                name: name.to_string(),
                extension: self.extension.clone(),
            }
        })
    }
}
