use qs_preview::Converter;
use qs_store::ObjectStore;

use crate::context::AppContext;
use crate::output::Reply;

/// Handle `qs config`: the effective config after every layer and flag.
pub fn run<S: ObjectStore, C: Converter>(ctx: &AppContext<S, C>) -> anyhow::Result<Reply> {
    Reply::json(&ctx.config)
}
