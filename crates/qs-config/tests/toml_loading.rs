//! Integration tests for layered configuration loading.
//!
//! Uses `figment::Jail` for sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use qs_config::{ConfigError, QsConfig, ShareOverrides};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[share]
bucket = "team-bucket"
folder = "notebooks/shared"
extension = ".ipynb"
hidden_marker = "_archived_"

[tools]
aws_bin = "/opt/aws/bin/aws"
aws_profile = "research"
jupyter_bin = "/opt/conda/bin/jupyter"
nbconvert_template = "lab"

[preview]
scratch_dir = "/var/tmp/quickshare"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(QsConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = QsConfig::from_figment(&figment).expect("config should load");

        assert_eq!(config.share.bucket, "team-bucket");
        assert_eq!(config.share.folder, "notebooks/shared");
        assert_eq!(config.share.hidden_marker, "_archived_");
        assert_eq!(config.tools.aws_bin, "/opt/aws/bin/aws");
        assert_eq!(config.tools.aws_profile(), Some("research"));
        assert_eq!(config.tools.jupyter_bin, "/opt/conda/bin/jupyter");
        assert_eq!(config.tools.nbconvert_template, "lab");
        assert_eq!(
            config.preview.scratch_dir(),
            std::path::PathBuf::from("/var/tmp/quickshare")
        );
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults_for_missing_fields() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[share]
bucket = "only-bucket"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(QsConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = QsConfig::from_figment(&figment).expect("config should load");

        assert_eq!(config.share.bucket, "only-bucket");
        assert_eq!(config.share.folder, "quickshare");
        assert_eq!(config.share.extension, ".ipynb");
        assert_eq!(config.tools.nbconvert_template, "classic");
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".quickshare")?;
        jail.create_file(
            ".quickshare/config.toml",
            r#"
[share]
bucket = "project-bucket"
folder = "/shared/"
"#,
        )?;

        let config = QsConfig::load().expect("config should load");
        assert_eq!(config.share.bucket, "project-bucket");
        assert_eq!(config.share.folder, "shared");
        Ok(())
    });
}

#[test]
fn env_beats_project_config() {
    Jail::expect_with(|jail| {
        jail.create_dir(".quickshare")?;
        jail.create_file(
            ".quickshare/config.toml",
            r#"
[share]
bucket = "project-bucket"
"#,
        )?;
        jail.set_env("QUICKSHARE_SHARE__BUCKET", "env-bucket");
        jail.set_env("QUICKSHARE_SHARE__EXTENSION", ".IPYNB");

        let config = QsConfig::load().expect("config should load");
        assert_eq!(config.share.bucket, "env-bucket");
        assert_eq!(config.share.extension, ".ipynb");
        Ok(())
    });
}

#[test]
fn cli_overrides_beat_env() {
    Jail::expect_with(|jail| {
        jail.set_env("QUICKSHARE_SHARE__FOLDER", "env-folder");

        let overrides = ShareOverrides {
            bucket: None,
            folder: Some("cli-folder".into()),
            extension: Some(".py".into()),
        };
        let config = QsConfig::load()
            .and_then(|config| config.with_overrides(&overrides))
            .expect("config should load");

        assert_eq!(config.share.folder, "cli-folder");
        assert_eq!(config.share.extension, ".py");
        Ok(())
    });
}

#[test]
fn invalid_env_value_is_reported() {
    Jail::expect_with(|jail| {
        jail.set_env("QUICKSHARE_SHARE__EXTENSION", "ipynb");

        let err = QsConfig::load().expect_err("extension without dot must fail");
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "share.extension"
        ));
        Ok(())
    });
}
