use anyhow::Context;
use qs_core::responses::ListResponse;
use qs_preview::Converter;
use qs_store::ObjectStore;

use crate::context::AppContext;
use crate::output::Reply;
use crate::progress::Progress;

/// Handle `qs list`.
pub fn run<S: ObjectStore, C: Converter>(ctx: &AppContext<S, C>) -> anyhow::Result<Reply> {
    let location = ctx.catalog.location();
    let progress = Progress::spinner(&format!("Listing s3://{}/{}", location.bucket, location.prefix()));
    let result = ctx.catalog.list_visible();
    progress.settle(&result, "listing failed");

    let entries = result.context("failed to list shared files")?;
    Reply::json(&ListResponse::new(
        &location.bucket,
        &location.folder,
        entries,
    ))
}
