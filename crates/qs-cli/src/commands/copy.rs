use anyhow::Context;
use qs_core::Selection;
use qs_core::responses::{CopyResponse, MessageResponse};
use qs_core::selection::selected;
use qs_preview::Converter;
use qs_store::ObjectStore;

use crate::context::AppContext;
use crate::output::Reply;

pub const NOTHING_TO_COPY: &str = "Nothing to copy";

/// Handle `qs copy [URI_OR_NAME]`: copy the notebook fetched by an earlier
/// `qs preview` into the working directory.
pub fn run<S: ObjectStore, C: Converter>(
    ctx: &AppContext<S, C>,
    target: Option<&str>,
) -> anyhow::Result<Reply> {
    let Some(raw) = selected(target) else {
        return Reply::json(&MessageResponse::new(NOTHING_TO_COPY));
    };
    let uri = ctx
        .catalog
        .location()
        .resolve(raw)
        .with_context(|| format!("invalid copy target `{raw}`"))?;

    let outcome = ctx
        .preview
        .copy_to_workdir(Some(&uri.to_string()), &ctx.workdir)
        .with_context(|| format!("failed to copy {uri}"))?;

    match outcome {
        Selection::Done(copied_to) => Reply::json(&CopyResponse {
            source: uri,
            copied_to,
        }),
        Selection::NothingSelected => Reply::json(&MessageResponse::new(NOTHING_TO_COPY)),
    }
}
