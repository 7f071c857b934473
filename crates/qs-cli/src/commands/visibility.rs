use anyhow::Context;
use qs_core::Selection;
use qs_core::responses::{MessageResponse, VisibilityResponse};
use qs_core::selection::selected;
use qs_preview::Converter;
use qs_store::ObjectStore;

use crate::context::AppContext;
use crate::output::Reply;
use crate::progress::Progress;

pub const NOTHING_TO_HIDE: &str = "Nothing to hide";
pub const NOTHING_TO_UNHIDE: &str = "Nothing to unhide";

/// Handle `qs hide [NAME]`.
pub fn hide<S: ObjectStore, C: Converter>(
    ctx: &AppContext<S, C>,
    name: Option<&str>,
) -> anyhow::Result<Reply> {
    let Some(name) = selected(name) else {
        return Reply::json(&MessageResponse::new(NOTHING_TO_HIDE));
    };

    let progress = Progress::spinner("Hiding file from everyone...");
    let result = ctx.catalog.hide(Some(name));
    progress.settle(&result, "hide failed");

    let Selection::Done(moved_to) = result.with_context(|| format!("failed to hide {name}"))?
    else {
        return Reply::json(&MessageResponse::new(NOTHING_TO_HIDE));
    };

    let marker = &ctx.catalog.location().marker;
    let visible = marker.reveal(moved_to.file_name()).to_string();
    let message = format!(
        "Done! Hid file as {moved_to}. Remove `{}` from filename in S3 to unhide",
        marker.as_str()
    );
    respond(ctx, visible, moved_to, message)
}

/// Handle `qs unhide [NAME]`.
pub fn unhide<S: ObjectStore, C: Converter>(
    ctx: &AppContext<S, C>,
    name: Option<&str>,
) -> anyhow::Result<Reply> {
    let Some(name) = selected(name) else {
        return Reply::json(&MessageResponse::new(NOTHING_TO_UNHIDE));
    };

    let progress = Progress::spinner("Restoring file...");
    let result = ctx.catalog.unhide(Some(name));
    progress.settle(&result, "unhide failed");

    let Selection::Done(moved_to) = result.with_context(|| format!("failed to unhide {name}"))?
    else {
        return Reply::json(&MessageResponse::new(NOTHING_TO_UNHIDE));
    };

    let visible = moved_to.file_name().to_string();
    let message = format!("Done! Restored {moved_to}");
    respond(ctx, visible, moved_to, message)
}

fn respond<S: ObjectStore, C: Converter>(
    ctx: &AppContext<S, C>,
    name: String,
    moved_to: qs_core::ObjectUri,
    message: String,
) -> anyhow::Result<Reply> {
    let entries = ctx
        .catalog
        .list_visible()
        .context("failed to refresh listing")?;
    Reply::json(&VisibilityResponse {
        name,
        moved_to,
        message,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use qs_store::Operation;

    use super::{NOTHING_TO_HIDE, hide, unhide};
    use crate::commands::test_support::{Fixture, uri};
    use crate::output::Reply;

    #[test]
    fn hide_moves_object_and_returns_refreshed_listing() {
        let fx = Fixture::new();

        let Reply::Json(value) = hide(&fx.context(), Some("a.ipynb")).unwrap() else {
            panic!("expected json");
        };

        assert_eq!(value["name"], "a.ipynb");
        assert_eq!(value["moved_to"], "s3://bucket/folder/_hide_a.ipynb");
        assert_eq!(
            value["message"],
            "Done! Hid file as s3://bucket/folder/_hide_a.ipynb. Remove `_hide_` from filename in S3 to unhide"
        );
        assert_eq!(value["entries"], serde_json::json!([]));
        assert!(fx.store.contains(&uri("folder/_hide_a.ipynb")));
        assert!(!fx.store.contains(&uri("folder/a.ipynb")));
    }

    #[test]
    fn hide_without_name_is_benign() {
        let fx = Fixture::new();

        let Reply::Json(value) = hide(&fx.context(), Some("  ")).unwrap() else {
            panic!("expected json");
        };

        assert_eq!(value["message"], NOTHING_TO_HIDE);
        assert!(fx.store.calls().is_empty());
    }

    #[test]
    fn hide_failure_does_not_refresh_listing() {
        let fx = Fixture::new();
        fx.store.fail_on(Operation::Move);

        let err = hide(&fx.context(), Some("a.ipynb")).unwrap_err();

        assert!(format!("{err:#}").contains("failed to hide a.ipynb"));
        assert_eq!(fx.store.calls(), vec![Operation::Move]);
    }

    #[test]
    fn unhide_restores_hidden_object() {
        let fx = Fixture::new();

        let Reply::Json(value) = unhide(&fx.context(), Some("b.ipynb")).unwrap() else {
            panic!("expected json");
        };

        assert_eq!(value["name"], "b.ipynb");
        assert_eq!(value["moved_to"], "s3://bucket/folder/b.ipynb");
        let names = value["entries"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["name"].as_str().unwrap().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["a.ipynb", "b.ipynb"]);
    }
}
