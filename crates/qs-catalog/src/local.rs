use std::path::{Path, PathBuf};

use qs_core::names::has_extension;

use crate::CatalogError;

/// Regular files directly in `dir` whose names end with `extension`, sorted.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if `dir` cannot be read.
pub fn upload_candidates(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, CatalogError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| has_extension(name, extension));
        if matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lists_matching_files_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.ipynb", "A.IPYNB", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"{}").unwrap();
        }
        std::fs::create_dir(dir.path().join("folder.ipynb")).unwrap();

        let files = upload_candidates(dir.path(), ".ipynb").unwrap();

        assert_eq!(
            files,
            vec![dir.path().join("A.IPYNB"), dir.path().join("b.ipynb")]
        );
    }

    #[test]
    fn missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = upload_candidates(&dir.path().join("gone"), ".ipynb").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
