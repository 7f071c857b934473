use qs_preview::Converter;
use qs_store::ObjectStore;

use crate::cli::Commands;
use crate::context::AppContext;
use crate::output::Reply;

/// Route a parsed command to its handler.
pub fn dispatch<S: ObjectStore, C: Converter>(
    command: &Commands,
    ctx: &AppContext<S, C>,
) -> anyhow::Result<Reply> {
    match command {
        Commands::List => super::list::run(ctx),
        Commands::Preview { target, output } => {
            super::preview::run(ctx, target.as_deref(), output.as_deref())
        }
        Commands::Hide { name } => super::visibility::hide(ctx, name.as_deref()),
        Commands::Unhide { name } => super::visibility::unhide(ctx, name.as_deref()),
        Commands::Upload { file } => super::upload::run(ctx, file.as_deref()),
        Commands::Local { dir } => super::local::run(ctx, dir.as_deref()),
        Commands::Copy { target } => super::copy::run(ctx, target.as_deref()),
        Commands::Config => super::config::run(ctx),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::dispatch;
    use crate::cli::Commands;
    use crate::commands::test_support::Fixture;
    use crate::output::Reply;

    #[test]
    fn list_routes_to_catalog_listing() {
        let fx = Fixture::new();
        let ctx = fx.context();

        let Reply::Json(value) = dispatch(&Commands::List, &ctx).unwrap() else {
            panic!("list should reply with json");
        };

        assert_eq!(value["total"], 1);
        assert_eq!(value["entries"][0]["name"], "a.ipynb");
    }

    #[test]
    fn preview_without_target_prints_sentinel() {
        let fx = Fixture::new();
        let ctx = fx.context();

        let reply = dispatch(
            &Commands::Preview {
                target: None,
                output: None,
            },
            &ctx,
        )
        .unwrap();

        assert!(matches!(reply, Reply::Document(text) if text == "None selected"));
    }
}
