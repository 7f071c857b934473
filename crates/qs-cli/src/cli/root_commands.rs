use std::path::PathBuf;

use clap::Subcommand;

/// Top-level commands for the `qs` CLI.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List visible shared documents
    List,
    /// Render a shared notebook to HTML
    Preview {
        /// s3:// URI or bare file name in the shared folder
        target: Option<String>,
        /// Write the HTML to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Hide a document by renaming it with the hidden marker
    Hide {
        /// File name in the shared folder
        name: Option<String>,
    },
    /// Restore a hidden document
    Unhide {
        /// File name, with or without the hidden marker
        name: Option<String>,
    },
    /// Upload a local document to the shared folder
    Upload {
        /// Local file path
        file: Option<PathBuf>,
    },
    /// List local documents that could be uploaded
    Local {
        /// Directory to scan (defaults to the current directory)
        dir: Option<PathBuf>,
    },
    /// Copy a previewed notebook into the current directory
    Copy {
        /// s3:// URI or bare file name in the shared folder
        target: Option<String>,
    },
    /// Show the effective configuration
    Config,
}
