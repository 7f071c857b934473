use std::path::Path;

use anyhow::Context;
use qs_core::responses::PreviewResponse;
use qs_core::selection::selected;
use qs_preview::{Converter, NONE_SELECTED, Preview};
use qs_store::ObjectStore;

use crate::context::AppContext;
use crate::output::Reply;
use crate::progress::Progress;

/// Handle `qs preview [URI_OR_NAME] [--output FILE]`.
///
/// Without `--output` the HTML itself is the reply. A failed preview is an
/// error, so the process exits non-zero.
pub fn run<S: ObjectStore, C: Converter>(
    ctx: &AppContext<S, C>,
    target: Option<&str>,
    output: Option<&Path>,
) -> anyhow::Result<Reply> {
    let Some(raw) = selected(target) else {
        return Ok(Reply::Document(NONE_SELECTED.to_string()));
    };
    let uri = ctx
        .catalog
        .location()
        .resolve(raw)
        .with_context(|| format!("invalid preview target `{raw}`"))?;

    let progress = Progress::spinner(&format!("Rendering {}...", uri.file_name()));
    let source = uri.to_string();
    let (artifact, html) = match ctx.preview.render(Some(&source)) {
        Preview::Rendered { artifact, html } => {
            progress.finish_clear();
            (artifact, html)
        }
        Preview::NoneSelected => {
            progress.finish_clear();
            return Ok(Reply::Document(NONE_SELECTED.to_string()));
        }
        Preview::Failed(error) => {
            progress.finish_err("preview failed");
            return Err(anyhow::Error::new(error).context(format!("failed to preview {uri}")));
        }
    };

    let Some(output) = output else {
        return Ok(Reply::Document(html));
    };
    let written_to = ctx.workdir.join(output);
    std::fs::write(&written_to, &html)
        .with_context(|| format!("failed to write {}", written_to.display()))?;

    Reply::json(&PreviewResponse {
        source_uri: artifact.source_uri,
        rendered_path: artifact.rendered_path,
        written_to,
        bytes: html.len(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use qs_store::Operation;

    use super::run;
    use crate::commands::test_support::Fixture;
    use crate::output::Reply;

    #[test]
    fn bare_name_resolves_against_share_folder() {
        let fx = Fixture::new();

        let reply = run(&fx.context(), Some("a.ipynb"), None).unwrap();

        assert!(matches!(reply, Reply::Document(html) if html == "<pre>{\"cells\":[1]}</pre>"));
    }

    #[test]
    fn output_flag_writes_html_file() {
        let fx = Fixture::new();

        let Reply::Json(value) = run(
            &fx.context(),
            Some("s3://bucket/folder/a.ipynb"),
            Some(Path::new("a.html")),
        )
        .unwrap() else {
            panic!("expected json");
        };

        let written = fx.workdir.path().join("a.html");
        assert_eq!(value["source_uri"], "s3://bucket/folder/a.ipynb");
        assert_eq!(value["written_to"], written.display().to_string());
        assert_eq!(
            std::fs::read_to_string(written).unwrap(),
            "<pre>{\"cells\":[1]}</pre>"
        );
    }

    #[test]
    fn non_notebook_fails_without_fetch() {
        let fx = Fixture::new();

        let err = run(&fx.context(), Some("c.txt"), None).unwrap_err();

        assert!(format!("{err:#}").contains("failed to preview s3://bucket/folder/c.txt"));
        assert!(fx.store.calls().is_empty());
    }

    #[test]
    fn fetch_failure_is_an_error() {
        let fx = Fixture::new();
        fx.store.fail_on(Operation::Copy);

        assert!(run(&fx.context(), Some("a.ipynb"), None).is_err());
    }
}
