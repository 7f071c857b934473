//! # qs-store
//!
//! The object store boundary. quickshare depends on exactly three verbs:
//! list objects under a prefix, copy (between local paths and object URIs),
//! and move. Any client exposing these semantics can back the catalog.
//!
//! - [`AwsCli`] shells out to `aws s3api list-objects`, `aws s3 cp` and `aws s3 mv`.
//! - `MemoryStore` (feature `mock`) keeps objects in memory for tests.

mod aws;
mod error;
mod listing;
#[cfg(feature = "mock")]
mod memory;

pub use aws::AwsCli;
pub use error::StoreError;
pub use listing::{ListedObject, parse_listing};
#[cfg(feature = "mock")]
pub use memory::{MemoryStore, Operation};

use std::fmt;
use std::path::PathBuf;

use qs_core::ObjectUri;

/// Either end of a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Local(PathBuf),
    Remote(ObjectUri),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(uri) => write!(f, "{uri}"),
        }
    }
}

/// Blocking object store client.
pub trait ObjectStore {
    /// All objects whose key starts with `prefix`, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the call fails or the response is malformed.
    fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<ListedObject>, StoreError>;

    /// Copy `source` to `destination`, replacing any existing object.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the copy fails.
    fn copy(&self, source: &Location, destination: &Location) -> Result<(), StoreError>;

    /// Rename an object. Atomicity is whatever the store provides; a failure
    /// is reported once and never rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the move fails.
    fn move_object(&self, source: &ObjectUri, destination: &ObjectUri) -> Result<(), StoreError>;
}

impl<S: ObjectStore + ?Sized> ObjectStore for &S {
    fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<ListedObject>, StoreError> {
        (**self).list_objects(bucket, prefix)
    }

    fn copy(&self, source: &Location, destination: &Location) -> Result<(), StoreError> {
        (**self).copy(source, destination)
    }

    fn move_object(&self, source: &ObjectUri, destination: &ObjectUri) -> Result<(), StoreError> {
        (**self).move_object(source, destination)
    }
}
