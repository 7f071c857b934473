use std::path::PathBuf;

use qs_catalog::CatalogService;
use qs_config::QsConfig;
use qs_preview::{Converter, NbConvert, PreviewService};
use qs_store::{AwsCli, ObjectStore};

/// Everything a command handler needs: the effective config, the two
/// services and the directory the command was started from.
pub struct AppContext<S = AwsCli, C = NbConvert> {
    pub config: QsConfig,
    pub catalog: CatalogService<S>,
    pub preview: PreviewService<S, C>,
    pub workdir: PathBuf,
}

impl AppContext {
    /// Wire the `aws` and `jupyter` adapters from config.
    #[must_use]
    pub fn init(config: QsConfig, workdir: PathBuf) -> Self {
        let store = AwsCli::new(&config.tools.aws_bin).with_profile(config.tools.aws_profile());
        let converter = NbConvert::new(
            &config.tools.jupyter_bin,
            &config.tools.nbconvert_template,
        );
        Self::from_parts(config, store.clone(), store, converter, workdir)
    }
}

impl<S: ObjectStore, C: Converter> AppContext<S, C> {
    pub fn from_parts(
        config: QsConfig,
        catalog_store: S,
        preview_store: S,
        converter: C,
        workdir: PathBuf,
    ) -> Self {
        let catalog = CatalogService::new(catalog_store, config.share.location());
        let preview = PreviewService::new(
            preview_store,
            converter,
            config.preview.scratch_dir(),
            &config.share.extension,
        );
        Self {
            config,
            catalog,
            preview,
            workdir,
        }
    }
}
