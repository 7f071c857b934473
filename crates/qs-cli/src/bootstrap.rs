use anyhow::Context;
use qs_config::{QsConfig, ShareOverrides};

use crate::cli::GlobalFlags;

/// Load layered config (`.env`, TOML files, `QUICKSHARE_*`), then apply
/// `--bucket`, `--folder` and `--extension`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<QsConfig> {
    let overrides = ShareOverrides {
        bucket: flags.bucket.clone(),
        folder: flags.folder.clone(),
        extension: flags.extension.clone(),
    };

    QsConfig::load_with_dotenv()
        .and_then(|config| config.with_overrides(&overrides))
        .context("failed to load quickshare configuration")
}
