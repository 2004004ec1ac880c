//! Storefront: the surface a view layer talks to.
//!
//! Views forward user intents through the `on_*` methods and read the
//! derived state back through the snapshot accessors. The storefront never
//! calls into a view.

use artshelf_store::DurableStore;
use tracing::{info, warn};

use crate::catalog::{CatalogSource, Product};
use crate::error::CatalogError;
use crate::favorites::{FavoriteSet, FavoritesStore, Toggled};
use crate::ids::ProductId;
use crate::reviews::{RatingAggregator, RatingSummary};
use crate::search::{BrandFilter, FilterCriteria, FilterEngine, FilteredCatalog};

/// Catalog browsing state for one user session.
pub struct Storefront<S> {
    filter: FilterEngine,
    favorites: FavoritesStore<S>,
    ratings: RatingAggregator,
    user: String,
}

impl<S: DurableStore + 'static> Storefront<S> {
    /// Create a storefront with an empty catalog.
    ///
    /// `favorites` is a shared handle: other surfaces holding a clone see the
    /// same set.
    pub fn new(
        favorites: FavoritesStore<S>,
        ratings: RatingAggregator,
        user: impl Into<String>,
    ) -> Self {
        Self {
            filter: FilterEngine::default(),
            favorites,
            ratings,
            user: user.into(),
        }
    }

    /// Fetch the catalog and hand it to the filter engine.
    ///
    /// On failure the previous catalog stays in place and the error is
    /// returned for display.
    pub async fn refresh_catalog(
        &mut self,
        source: &dyn CatalogSource,
    ) -> Result<usize, CatalogError> {
        match source.fetch_catalog().await {
            Ok(products) => {
                let count = products.len();
                self.filter.set_catalog(products);
                info!(count, "catalog refreshed");
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, kept = self.filter.catalog().len(), "catalog refresh failed");
                Err(e)
            }
        }
    }

    /// Replace the catalog directly.
    pub fn set_catalog(&mut self, products: Vec<Product>) {
        self.filter.set_catalog(products);
    }

    /// Search box changed.
    pub fn on_search_text_changed(&mut self, text: impl Into<String>) {
        self.filter.set_search_text(text);
    }

    /// Brand picker changed. `"All"` clears the brand filter.
    pub fn on_brand_changed(&mut self, brand: impl Into<BrandFilter>) {
        self.filter.set_brand(brand);
    }

    /// Heart icon pressed.
    pub async fn on_toggle_favorite(&self, product: &Product) -> Result<Toggled, CatalogError> {
        self.favorites.toggle(product.clone()).await
    }

    /// Rating form submitted by the session user.
    pub fn on_submit_rating(
        &mut self,
        product_id: &ProductId,
        score: u8,
        comment: impl Into<String>,
    ) -> Result<RatingSummary, CatalogError> {
        self.ratings.add_rating(product_id, score, comment, self.user.as_str())?;
        Ok(self.ratings.summary(product_id))
    }

    /// Products passing the current filters.
    pub fn current_filtered_catalog(&self) -> FilteredCatalog<'_> {
        self.filter.current()
    }

    /// Current favorite set.
    pub fn favorite_set_snapshot(&self) -> FavoriteSet {
        self.favorites.snapshot()
    }

    /// Rating statistics for a product.
    pub fn rating_summary(&self, product_id: &ProductId) -> RatingSummary {
        self.ratings.summary(product_id)
    }

    /// Open a product's detail view: seeds its ratings on first visit.
    pub fn open_product(&mut self, product_id: &ProductId) -> Result<&Product, CatalogError> {
        let product = self
            .filter
            .catalog()
            .iter()
            .find(|p| &p.id == product_id)
            .ok_or_else(|| CatalogError::ProductNotFound(product_id.to_string()))?;
        self.ratings.open(product_id);
        Ok(product)
    }

    /// Look up a product in the full catalog.
    pub fn product(&self, product_id: &ProductId) -> Option<&Product> {
        self.filter.catalog().iter().find(|p| &p.id == product_id)
    }

    /// Whether a product is a favorite.
    pub fn is_favorite(&self, product_id: &ProductId) -> bool {
        self.favorites.is_favorite(product_id)
    }

    /// Brand picker vocabulary.
    pub fn brands(&self) -> Vec<BrandFilter> {
        self.filter.brands()
    }

    /// Current filter criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        self.filter.criteria()
    }

    /// Shared favorites handle.
    pub fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }

    /// Session ratings.
    pub fn ratings(&self) -> &RatingAggregator {
        &self.ratings
    }

    /// Name recorded on submitted ratings.
    pub fn user(&self) -> &str {
        &self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalogSource;
    use artshelf_store::MemoryStore;
    use async_trait::async_trait;

    struct Offline;

    #[async_trait]
    impl CatalogSource for Offline {
        async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError> {
            Err(CatalogError::Network("connection refused".to_string()))
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("1", "Red Pen", "A", 1.0),
            Product::new("2", "Blue Pen", "B", 1.0),
            Product::new("3", "Red Marker", "A", 2.0),
        ]
    }

    async fn storefront() -> Storefront<MemoryStore> {
        let favorites = FavoritesStore::open(MemoryStore::new()).await;
        let mut storefront = Storefront::new(favorites, RatingAggregator::new(), "Bao");
        storefront
            .refresh_catalog(&StaticCatalogSource::new(catalog()))
            .await
            .unwrap();
        storefront
    }

    #[tokio::test]
    async fn test_filter_intents() {
        let mut storefront = storefront().await;
        storefront.on_search_text_changed("red");
        storefront.on_brand_changed("A");

        let ids: Vec<&str> = storefront
            .current_filtered_catalog()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_network_error_keeps_catalog() {
        let mut storefront = storefront().await;
        let result = storefront.refresh_catalog(&Offline).await;

        assert!(matches!(result, Err(CatalogError::Network(_))));
        assert_eq!(storefront.current_filtered_catalog().len(), 3);
    }

    #[tokio::test]
    async fn test_toggle_shared_between_surfaces() {
        let storefront = storefront().await;
        let favorites_tab = storefront.favorites().clone();
        let product = storefront.product(&ProductId::new("2")).unwrap().clone();

        let toggled = storefront.on_toggle_favorite(&product).await.unwrap();
        assert!(toggled.favorite);
        assert!(favorites_tab.is_favorite(&product.id));

        favorites_tab.remove(&product.id).await.unwrap();
        assert!(!storefront.is_favorite(&product.id));
        assert!(storefront.favorite_set_snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_submit_rating_uses_session_user() {
        let mut storefront = storefront().await;
        let id = ProductId::new("1");

        let summary = storefront.on_submit_rating(&id, 4, "smooth ink").unwrap();
        assert_eq!(summary.total_ratings, 1);
        assert_eq!(storefront.ratings().ratings(&id)[0].user, "Bao");

        let err = storefront.on_submit_rating(&id, 0, "no stars").unwrap_err();
        assert!(err.is_user_facing());
        assert_eq!(storefront.rating_summary(&id).total_ratings, 1);
    }

    #[tokio::test]
    async fn test_open_unknown_product() {
        let mut storefront = storefront().await;
        let result = storefront.open_product(&ProductId::new("99"));
        assert!(matches!(result, Err(CatalogError::ProductNotFound(_))));
    }
}
