//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storekeep_commerce::catalog::{CatalogStore, JsonFileCodec};
use storekeep_commerce::customer::UsernameLedger;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::display::ConsoleCatalogObserver;
use crate::output::Output;

/// Catalog store backed by the configured JSON file.
pub type FileCatalog = CatalogStore<JsonFileCodec>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => {
                            tracing::debug!(path = %config_path.display(), "using config file");
                            return Some(config);
                        }
                        Err(e) => {
                            tracing::warn!(path = %config_path.display(), error = %e, "ignoring unreadable config");
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.catalog_path)
    }

    pub fn usernames_path(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.usernames_path)
    }

    /// Open the catalog, loading it from disk.
    pub fn open_catalog(&self) -> FileCatalog {
        let path = self.catalog_path();
        self.output
            .debug(&format!("Catalog file: {}", path.display()));
        CatalogStore::open(JsonFileCodec::new(path))
            .with_resync_on_print(self.config.catalog.resync_on_print)
            .with_observer(ConsoleCatalogObserver::new(self.output.clone()))
    }

    /// Open the username ledger.
    pub fn open_ledger(&self) -> Result<UsernameLedger> {
        let path = self.usernames_path();
        UsernameLedger::open(&path)
            .with_context(|| format!("Failed to open username ledger: {}", path.display()))
    }
}
