//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use artshelf_catalog::catalog::HttpCatalogSource;
use artshelf_catalog::favorites::{FavoritesStore, LoadState};
use artshelf_catalog::reviews::RatingAggregator;
use artshelf_catalog::Storefront;
use artshelf_store::FileStore;

use crate::config::{ArtshelfConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ArtshelfConfig,
    /// File the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (ArtshelfConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some(path) => (ArtshelfConfig::load(&path)?, Some(path)),
                None => (ArtshelfConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory holding the favorites file.
    pub fn data_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.data_dir)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Open the favorites store over the data directory and load it.
    pub async fn favorites(&self) -> Result<FavoritesStore<FileStore>> {
        let dir = self.data_dir();
        let store = FileStore::open(&dir)
            .await
            .with_context(|| format!("Failed to open data directory: {}", dir.display()))?;
        let favorites = FavoritesStore::open(store).await;
        if favorites.load_state() == LoadState::ReadyEmpty {
            self.output.warn("Stored favorites could not be read; starting with none.");
        }
        self.output.debug(&format!(
            "Favorites {} ({} items) from {}",
            favorites.load_state().as_str(),
            favorites.len(),
            dir.display()
        ));
        Ok(favorites)
    }

    /// HTTP source for the configured catalog URL.
    pub fn catalog_source(&self) -> Result<HttpCatalogSource> {
        let timeout = Duration::from_secs(self.config.catalog.timeout_secs);
        Ok(HttpCatalogSource::new(&self.config.catalog.url, timeout)?)
    }

    /// Build a storefront for the configured user with favorites loaded and
    /// the catalog fetched.
    pub async fn storefront(&self) -> Result<Storefront<FileStore>> {
        self.storefront_for(self.config.session.user.clone()).await
    }

    /// Same as [`Context::storefront`], rating as `user`.
    pub async fn storefront_for(&self, user: String) -> Result<Storefront<FileStore>> {
        let favorites = self.favorites().await?;
        let mut storefront = Storefront::new(
            favorites,
            RatingAggregator::with_fixture(RatingAggregator::default_fixture()),
            user,
        );

        let source = self.catalog_source()?;
        let spinner = self.output.spinner("Fetching catalog...");
        let fetched = storefront.refresh_catalog(&source).await;
        spinner.finish_and_clear();

        let count =
            fetched.with_context(|| format!("Failed to fetch catalog from {}", source.url()))?;
        self.output.debug(&format!("Fetched {} products", count));
        Ok(storefront)
    }
}

/// Find a config file in `start` or its ancestors.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}
