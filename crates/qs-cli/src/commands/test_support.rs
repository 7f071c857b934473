//! Shared fixture for command handler tests: an in-memory bucket and a
//! converter that wraps the notebook body in `<pre>`.

use std::path::{Path, PathBuf};

use qs_config::QsConfig;
use qs_core::ObjectUri;
use qs_preview::{ConvertError, Converter, OutputFormat};
use qs_store::MemoryStore;
use tempfile::TempDir;

use crate::context::AppContext;

pub struct FakeConverter;

impl Converter for FakeConverter {
    fn convert(&self, input: &Path, format: OutputFormat) -> Result<PathBuf, ConvertError> {
        let output = input.with_extension(format.extension());
        let body = std::fs::read_to_string(input).expect("fetched notebook should exist");
        std::fs::write(&output, format!("<pre>{body}</pre>")).expect("output should write");
        Ok(output)
    }
}

pub struct Fixture {
    pub store: MemoryStore,
    pub converter: FakeConverter,
    pub scratch: TempDir,
    pub workdir: TempDir,
}

pub fn uri(key: &str) -> ObjectUri {
    ObjectUri::new("bucket", key)
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::with_objects([
                (uri("folder/a.ipynb"), b"{\"cells\":[1]}".as_slice()),
                (uri("folder/_hide_b.ipynb"), b"{\"cells\":[2]}".as_slice()),
                (uri("folder/c.txt"), b"text".as_slice()),
            ]),
            converter: FakeConverter,
            scratch: tempfile::tempdir().unwrap(),
            workdir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn context(&self) -> AppContext<&MemoryStore, &FakeConverter> {
        let mut config = QsConfig::default();
        config.share.bucket = "bucket".to_string();
        config.share.folder = "folder".to_string();
        config.preview.scratch_dir = self.scratch.path().display().to_string();

        AppContext::from_parts(
            config,
            &self.store,
            &self.store,
            &self.converter,
            self.workdir.path().to_path_buf(),
        )
    }
}
