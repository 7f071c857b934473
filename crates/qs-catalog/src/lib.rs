//! # qs-catalog
//!
//! The catalog service: enumerates shareable files under the share folder,
//! filters out hidden ones, and mutates visibility and contents.
//!
//! Visibility lives entirely in the object name (see [`qs_core::HiddenMarker`]).
//! Hide and unhide are renames; upload is a copy with no overwrite check.
//! Every listing is a full snapshot, sorted by name.

mod error;
mod local;

pub use error::CatalogError;
pub use local::upload_candidates;

use std::path::Path;

use qs_core::names::has_extension;
use qs_core::selection::selected;
use qs_core::{CatalogEntry, ObjectUri, Selection, ShareLocation};
use qs_store::{Location, ObjectStore};

pub struct CatalogService<S> {
    store: S,
    location: ShareLocation,
}

impl<S: ObjectStore> CatalogService<S> {
    pub fn new(store: S, location: ShareLocation) -> Self {
        Self { store, location }
    }

    pub const fn location(&self) -> &ShareLocation {
        &self.location
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Visible entries carrying the configured extension, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CatalogUnavailable`] if the listing fails or is
    /// malformed.
    pub fn list_visible(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let location = &self.location;
        let objects = self
            .store
            .list_objects(&location.bucket, &location.prefix())
            .map_err(CatalogError::CatalogUnavailable)?;

        let mut entries = Vec::with_capacity(objects.len());
        for object in objects {
            let Some(name) = location.name_from_key(&object.key) else {
                tracing::warn!(key = %object.key, "skipping object outside the share folder");
                continue;
            };
            if name.is_empty() {
                continue;
            }
            if name.contains('/') {
                tracing::debug!(key = %object.key, "skipping nested object");
                continue;
            }
            if location.marker.is_hidden(name) || !has_extension(name, &location.extension) {
                continue;
            }
            entries.push(CatalogEntry::new(name, location.uri_for(name)));
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries.dedup_by(|a, b| a.name == b.name);
        Ok(entries)
    }

    /// Rename `name` to `<marker>name`, returning the hidden object's URI.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ObjectMoveFailed`] if the store rejects the move,
    /// [`CatalogError::AlreadyHidden`] for a name already carrying the marker,
    /// [`CatalogError::ExtensionMismatch`] for a name that is not a catalog
    /// entry, or [`CatalogError::InvalidName`] for a malformed selection.
    pub fn hide(&self, selection: Option<&str>) -> Result<Selection<ObjectUri>, CatalogError> {
        let Some(name) = self.selected_name(selection)? else {
            return Ok(Selection::NothingSelected);
        };
        let marker = &self.location.marker;
        if marker.is_hidden(&name) {
            return Err(CatalogError::AlreadyHidden(name));
        }
        self.check_extension(&name)?;

        let hidden = marker.hide(&name);
        let to = self.rename(&name, &hidden)?;
        tracing::info!(%to, "hid catalog entry");
        Ok(Selection::Done(to))
    }

    /// Inverse of [`Self::hide`]. Accepts the hidden or the visible name; a
    /// visible name is matched against the stored hidden objects first, so
    /// `x.ipynb` also restores `_HIDE_x.ipynb`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ObjectMoveFailed`] if the store rejects the move
    /// (including when no hidden object exists),
    /// [`CatalogError::CatalogUnavailable`] if looking up a visible name's
    /// hidden object fails, or [`CatalogError::InvalidName`] for a malformed
    /// selection.
    pub fn unhide(&self, selection: Option<&str>) -> Result<Selection<ObjectUri>, CatalogError> {
        let Some(name) = self.selected_name(selection)? else {
            return Ok(Selection::NothingSelected);
        };
        let marker = &self.location.marker;
        let (hidden, visible) = if marker.is_hidden(&name) {
            let visible = marker.reveal(&name).to_string();
            (name, visible)
        } else {
            (self.hidden_name_for(&name)?, name)
        };
        if visible.is_empty() {
            return Err(CatalogError::InvalidName(hidden));
        }

        let to = self.rename(&hidden, &visible)?;
        tracing::info!(%to, "unhid catalog entry");
        Ok(Selection::Done(to))
    }

    /// Copy a local file into the share folder under its own file name.
    ///
    /// An existing object with the same name is silently replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UploadFailed`] if the file is missing or the
    /// copy fails, [`CatalogError::ExtensionMismatch`] or
    /// [`CatalogError::HiddenName`] if the file would not appear in the
    /// catalog, or [`CatalogError::InvalidName`] for a path without a UTF-8
    /// file name.
    pub fn upload(&self, selection: Option<&Path>) -> Result<Selection<ObjectUri>, CatalogError> {
        let Some(path) = selection.filter(|path| !path.as_os_str().is_empty()) else {
            return Ok(Selection::NothingSelected);
        };
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| CatalogError::InvalidName(path.display().to_string()))?;
        self.check_extension(name)?;
        if self.location.marker.is_hidden(name) {
            return Err(CatalogError::HiddenName {
                name: name.to_string(),
                marker: self.location.marker.as_str().to_string(),
            });
        }
        std::fs::metadata(path).map_err(|source| CatalogError::UploadFailed {
            path: path.to_path_buf(),
            source: source.into(),
        })?;

        let destination = self.location.uri_for(name);
        self.store
            .copy(
                &Location::Local(path.to_path_buf()),
                &Location::Remote(destination.clone()),
            )
            .map_err(|source| CatalogError::UploadFailed {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(path = %path.display(), %destination, "uploaded file");
        Ok(Selection::Done(destination))
    }

    /// Local files in `dir` that [`Self::upload`] would accept.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if `dir` cannot be read.
    pub fn upload_candidates(&self, dir: &Path) -> Result<Vec<std::path::PathBuf>, CatalogError> {
        let mut files = upload_candidates(dir, &self.location.extension)?;
        files.retain(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| !self.location.marker.is_hidden(name))
        });
        Ok(files)
    }

    fn check_extension(&self, name: &str) -> Result<(), CatalogError> {
        if has_extension(name, &self.location.extension) {
            return Ok(());
        }
        Err(CatalogError::ExtensionMismatch {
            name: name.to_string(),
            extension: self.location.extension.clone(),
        })
    }

    /// The stored hidden name for `visible`, whatever the marker's casing.
    /// Falls back to the configured marker when no hidden object matches.
    fn hidden_name_for(&self, visible: &str) -> Result<String, CatalogError> {
        let location = &self.location;
        let objects = self
            .store
            .list_objects(&location.bucket, &location.prefix())
            .map_err(CatalogError::CatalogUnavailable)?;

        let stored = objects
            .iter()
            .filter_map(|object| location.name_from_key(&object.key))
            .find(|name| {
                location.marker.is_hidden(name) && location.marker.reveal(name) == visible
            })
            .map(str::to_string);
        Ok(stored.unwrap_or_else(|| location.marker.hide(visible)))
    }

    fn rename(&self, from_name: &str, to_name: &str) -> Result<ObjectUri, CatalogError> {
        let from = self.location.uri_for(from_name);
        let to = self.location.uri_for(to_name);
        match self.store.move_object(&from, &to) {
            Ok(()) => Ok(to),
            Err(source) => Err(CatalogError::ObjectMoveFailed { from, to, source }),
        }
    }

    /// A flat name from a bare name or an `s3://` URI (its last segment).
    fn selected_name(&self, selection: Option<&str>) -> Result<Option<String>, CatalogError> {
        let Some(raw) = selected(selection) else {
            return Ok(None);
        };

        let name = if ObjectUri::is_uri(raw) {
            let uri: ObjectUri = raw
                .parse()
                .map_err(|_| CatalogError::InvalidName(raw.to_string()))?;
            uri.file_name().to_string()
        } else {
            raw.to_string()
        };

        if name.is_empty() || name == "." || name == ".." || name.contains('/') {
            return Err(CatalogError::InvalidName(raw.to_string()));
        }
        Ok(Some(name))
    }
}
