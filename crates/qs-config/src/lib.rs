//! # qs-config
//!
//! Layered configuration loading for quickshare using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Command-line overrides (`--bucket`, `--folder`, `--extension`)
//! 2. Environment variables (`QUICKSHARE_*` prefix, `__` as separator)
//! 3. Project-level `.quickshare/config.toml`
//! 4. User-level `~/.config/quickshare/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `QUICKSHARE_SHARE__BUCKET` -> `share.bucket`,
//! `QUICKSHARE_TOOLS__AWS_BIN` -> `tools.aws_bin`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use qs_config::QsConfig;
//!
//! let config = QsConfig::load_with_dotenv().expect("config");
//! println!("sharing from s3://{}/{}", config.share.bucket, config.share.folder);
//! ```

mod error;
mod preview;
mod share;
mod tools;

pub use error::ConfigError;
pub use preview::PreviewConfig;
pub use share::{ShareConfig, ShareOverrides};
pub use tools::ToolsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QsConfig {
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl QsConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validated()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".quickshare/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("QUICKSHARE_").split("__"))
    }

    /// Apply command-line overrides, then re-validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if an override is invalid.
    pub fn with_overrides(mut self, overrides: &ShareOverrides) -> Result<Self, ConfigError> {
        self.share.apply(overrides);
        self.validated()
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        self.share = self.share.validated()?;
        Ok(self)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quickshare").join("config.toml"))
    }
}
