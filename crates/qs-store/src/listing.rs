//! `list-objects` JSON response parsing.

use serde::Deserialize;

use crate::StoreError;

/// One object from a listing. Only the key is needed by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListedObject {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Size", default)]
    pub size: Option<u64>,
}

impl ListedObject {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            size: None,
        }
    }
}

#[derive(Deserialize)]
struct ListObjectsOutput {
    #[serde(rename = "Contents")]
    contents: Vec<ListedObject>,
}

/// Parse `{"Contents": [{"Key": ...}, ...]}`.
///
/// The AWS CLI prints nothing at all when a prefix holds no objects, so
/// blank output is an empty listing. Output without `Contents` is malformed.
///
/// # Errors
///
/// Returns [`StoreError::MalformedListing`] for non-JSON output or a missing
/// `Contents` array.
pub fn parse_listing(raw: &str) -> Result<Vec<ListedObject>, StoreError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str::<ListObjectsOutput>(raw)
        .map(|output| output.contents)
        .map_err(|error| StoreError::MalformedListing(error.to_string()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_contents_keys() {
        let raw = r#"{
            "Contents": [
                {"Key": "quickshare/a.ipynb", "Size": 1024, "ETag": "\"abc\""},
                {"Key": "quickshare/_hide_b.ipynb"}
            ]
        }"#;
        let objects = parse_listing(raw).unwrap();
        assert_eq!(
            objects,
            vec![
                ListedObject {
                    key: "quickshare/a.ipynb".into(),
                    size: Some(1024),
                },
                ListedObject::new("quickshare/_hide_b.ipynb"),
            ]
        );
    }

    #[test]
    fn blank_output_is_empty_listing() {
        assert!(parse_listing("").unwrap().is_empty());
        assert!(parse_listing("\n  ").unwrap().is_empty());
    }

    #[test]
    fn missing_contents_is_malformed() {
        let err = parse_listing(r#"{"Prefix": "quickshare/"}"#).unwrap_err();
        assert!(matches!(err, StoreError::MalformedListing(_)));
    }

    #[test]
    fn non_json_is_malformed() {
        let err = parse_listing("2024-01-01 a.ipynb").unwrap_err();
        assert!(matches!(err, StoreError::MalformedListing(_)));
    }
}
