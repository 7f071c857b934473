use std::path::Path;

use anyhow::Context;
use qs_core::Selection;
use qs_core::responses::{MessageResponse, UploadResponse};
use qs_preview::Converter;
use qs_store::ObjectStore;

use crate::context::AppContext;
use crate::output::Reply;
use crate::progress::Progress;

pub const NO_FILE_SELECTED: &str = "No file selected for upload";

/// Handle `qs upload [FILE]`. Relative paths resolve against the working
/// directory.
pub fn run<S: ObjectStore, C: Converter>(
    ctx: &AppContext<S, C>,
    file: Option<&Path>,
) -> anyhow::Result<Reply> {
    let Some(file) = file.filter(|path| !path.as_os_str().is_empty()) else {
        return Reply::json(&MessageResponse::new(NO_FILE_SELECTED));
    };
    let local_path = ctx.workdir.join(file);

    let progress = Progress::spinner(&format!("Uploading {}...", file.display()));
    let result = ctx.catalog.upload(Some(local_path.as_path()));
    progress.settle(&result, "upload failed");

    let Selection::Done(uploaded) =
        result.with_context(|| format!("failed to upload {}", file.display()))?
    else {
        return Reply::json(&MessageResponse::new(NO_FILE_SELECTED));
    };

    let entries = ctx
        .catalog
        .list_visible()
        .context("failed to refresh listing")?;
    Reply::json(&UploadResponse {
        message: format!("{} uploaded!", uploaded.file_name()),
        local_path,
        uploaded,
        entries,
    })
}
