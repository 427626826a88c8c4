//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storekeep_commerce::catalog::{DEFAULT_CATALOG_FILE, LOW_STOCK_THRESHOLD};
use storekeep_commerce::customer::DEFAULT_USERNAMES_FILE;

/// File names searched for, in order, from the working directory upwards.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storekeep.toml", ".storekeep.toml", "storekeep.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where data files live.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Catalog behaviour.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Data file locations. Relative paths resolve against the working directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Persisted product catalog.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Known shopper usernames, one per line.
    #[serde(default = "default_usernames_path")]
    pub usernames_path: String,
}

fn default_catalog_path() -> String {
    DEFAULT_CATALOG_FILE.to_string()
}

fn default_usernames_path() -> String {
    DEFAULT_USERNAMES_FILE.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            usernames_path: default_usernames_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Rewrite the catalog file whenever a non-empty catalog is printed.
    #[serde(default = "default_true")]
    pub resync_on_print: bool,

    /// Stock level below which a product is highlighted.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
}

fn default_true() -> bool {
    true
}

fn default_low_stock_threshold() -> u32 {
    LOW_STOCK_THRESHOLD
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            resync_on_print: true,
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

/// Generate a default storekeep.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storekeep configuration

[storage]
catalog_path = "{catalog}"
usernames_path = "{usernames}"

[catalog]
# Rewrite the catalog file after printing it
resync_on_print = true
low_stock_threshold = {threshold}
"#,
        catalog = DEFAULT_CATALOG_FILE,
        usernames = DEFAULT_USERNAMES_FILE,
        threshold = LOW_STOCK_THRESHOLD,
    )
}
