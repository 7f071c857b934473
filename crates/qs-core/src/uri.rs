//! `s3://bucket/key` object identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::UriError;

const SCHEME: &str = "s3://";

/// Fully qualified location of an object in the store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectUri {
    pub bucket: String,
    pub key: String,
}

impl ObjectUri {
    #[must_use]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// The last `/`-separated segment of the key.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.key.rsplit('/').next().unwrap_or(&self.key)
    }

    /// Whether `raw` looks like an object URI rather than a bare name.
    #[must_use]
    pub fn is_uri(raw: &str) -> bool {
        raw.starts_with(SCHEME)
    }
}

impl fmt::Display for ObjectUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}{}/{}", self.bucket, self.key)
    }
}

impl FromStr for ObjectUri {
    type Err = UriError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let rest = raw
            .strip_prefix(SCHEME)
            .ok_or_else(|| UriError::MissingScheme(raw.to_string()))?;
        let (bucket, key) = rest
            .split_once('/')
            .ok_or_else(|| UriError::MissingKey(raw.to_string()))?;

        if bucket.is_empty() {
            return Err(UriError::EmptyBucket(raw.to_string()));
        }
        if key.is_empty() {
            return Err(UriError::MissingKey(raw.to_string()));
        }

        Ok(Self::new(bucket, key))
    }
}

impl TryFrom<String> for ObjectUri {
    type Error = UriError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ObjectUri> for String {
    fn from(uri: ObjectUri) -> Self {
        uri.to_string()
    }
}
