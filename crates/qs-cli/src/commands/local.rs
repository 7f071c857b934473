use std::path::Path;

use anyhow::Context;
use qs_core::responses::CandidatesResponse;
use qs_preview::Converter;
use qs_store::ObjectStore;

use crate::context::AppContext;
use crate::output::Reply;

/// Handle `qs local [DIR]`: files the upload command would accept.
pub fn run<S: ObjectStore, C: Converter>(
    ctx: &AppContext<S, C>,
    dir: Option<&Path>,
) -> anyhow::Result<Reply> {
    let dir = dir.map_or_else(|| ctx.workdir.clone(), |dir| ctx.workdir.join(dir));
    let files = ctx
        .catalog
        .upload_candidates(&dir)
        .with_context(|| format!("failed to scan {}", dir.display()))?;

    Reply::json(&CandidatesResponse { dir, files })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::run;
    use crate::commands::test_support::Fixture;
    use crate::output::Reply;

    #[test]
    fn lists_matching_files_in_workdir() {
        let fx = Fixture::new();
        for name in ["b.ipynb", "a.IPYNB", "notes.txt"] {
            std::fs::write(fx.workdir.path().join(name), "{}").unwrap();
        }

        let Reply::Json(value) = run(&fx.context(), None).unwrap() else {
            panic!("expected json");
        };

        let files = value["files"].as_array().unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].as_str().unwrap().ends_with("a.IPYNB"));
        assert!(files[1].as_str().unwrap().ends_with("b.ipynb"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let fx = Fixture::new();

        let err = run(&fx.context(), Some(std::path::Path::new("nope"))).unwrap_err();

        assert!(format!("{err:#}").contains("failed to scan"));
    }
}
