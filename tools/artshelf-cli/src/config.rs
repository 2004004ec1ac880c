//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use artshelf_catalog::catalog::DEFAULT_CATALOG_URL;
use serde::{Deserialize, Serialize};

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["artshelf.toml", ".artshelf.toml", "artshelf.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtshelfConfig {
    /// Where the catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Where favorites are kept.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Who is browsing.
    #[serde(default)]
    pub session: SessionConfig,

    /// Log filtering.
    #[serde(default)]
    pub log: LogConfig,
}

impl ArtshelfConfig {
    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse config text.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Catalog source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Endpoint returning the product array.
    #[serde(default = "default_catalog_url")]
    pub url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Durable storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for the favorites file, relative to the working directory
    /// unless absolute.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    ".artshelf".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Session settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name recorded on submitted ratings.
    #[serde(default = "default_user")]
    pub user: String,
}

fn default_user() -> String {
    "Bao".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
        }
    }
}

/// Logging settings. `RUST_LOG` takes precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive, e.g. `warn` or `artshelf_catalog=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Generate a default artshelf.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# artshelf configuration

[catalog]
url = "{url}"
timeout_secs = 30

[storage]
data_dir = ".artshelf"

[session]
user = "Bao"

[log]
# Overridden by RUST_LOG when set.
level = "warn"
"#,
        url = DEFAULT_CATALOG_URL
    )
}
