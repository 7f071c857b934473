use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `qs` binary.
#[derive(Debug, Parser)]
#[command(
    name = "qs",
    version,
    about = "quickshare - browse, preview, hide and upload shared notebooks"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no spinners)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Bucket holding the shared folder
    #[arg(long, global = true)]
    pub bucket: Option<String>,

    /// Shared folder inside the bucket
    #[arg(long, global = true)]
    pub folder: Option<String>,

    /// File extension of shared documents (e.g. .ipynb)
    #[arg(long, global = true)]
    pub extension: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            bucket: self.bucket.clone(),
            folder: self.folder.clone(),
            extension: self.extension.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn format_defaults_to_table() {
        let cli = Cli::try_parse_from(["qs", "list"]).expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "qs",
            "--format",
            "json",
            "--bucket",
            "team-bucket",
            "--verbose",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.bucket.as_deref(), Some("team-bucket"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["qs", "hide", "a.ipynb", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Hide { name: Some(ref n) } if n == "a.ipynb"));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["qs", "--format", "xml", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn selection_arguments_are_optional() {
        for command in ["preview", "hide", "unhide", "upload", "copy", "local"] {
            Cli::try_parse_from(["qs", command]).expect("cli should parse without a selection");
        }
    }

    #[test]
    fn preview_accepts_output_file() {
        let cli = Cli::try_parse_from([
            "qs",
            "preview",
            "s3://bucket/folder/a.ipynb",
            "--output",
            "a.html",
        ])
        .expect("cli should parse");

        let Commands::Preview { target, output } = cli.command else {
            panic!("expected preview command");
        };
        assert_eq!(target.as_deref(), Some("s3://bucket/folder/a.ipynb"));
        assert_eq!(output, Some(PathBuf::from("a.html")));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["qs", "--folder", "team", "--extension", ".py", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();

        assert_eq!(flags.folder.as_deref(), Some("team"));
        assert_eq!(flags.extension.as_deref(), Some(".py"));
        assert_eq!(flags.bucket, None);
    }
}
