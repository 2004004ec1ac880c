//! Catalog core for the artshelf art-supply browser.
//!
//! This crate holds the state behind a product listing, detail and favorites
//! view, independent of any UI toolkit:
//!
//! - **Catalog**: Product records and the sources that fetch them
//! - **Search**: Free-text and brand filtering over the loaded catalog
//! - **Favorites**: A persisted, observable set of favorited products
//! - **Reviews**: Session ratings with averages and per-score counts
//! - **Storefront**: One facade tying the above together for a view layer
//!
//! # Example
//!
//! ```rust,ignore
//! use artshelf_catalog::prelude::*;
//! use artshelf_store::FileStore;
//!
//! let store = FileStore::open(".artshelf").await?;
//! let favorites = FavoritesStore::open(store).await;
//! let mut storefront = Storefront::new(
//!     favorites,
//!     RatingAggregator::with_fixture(RatingAggregator::default_fixture()),
//!     "Bao",
//! );
//!
//! storefront
//!     .refresh_catalog(&HttpCatalogSource::new(DEFAULT_CATALOG_URL, timeout)?)
//!     .await?;
//! storefront.on_search_text_changed("pen");
//! storefront.on_brand_changed("Thiên Long");
//!
//! for product in storefront.current_filtered_catalog() {
//!     println!("{} {}", product.art_name, product.discounted_price());
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod favorites;
pub mod reviews;
pub mod search;
pub mod storefront;

pub use error::CatalogError;
pub use ids::*;
pub use money::{Currency, Money};
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    #[cfg(feature = "http")]
    pub use crate::catalog::HttpCatalogSource;
    pub use crate::catalog::{CatalogSource, Product, StaticCatalogSource, DEFAULT_CATALOG_URL};

    // Search
    pub use crate::search::{BrandFilter, FilterCriteria, FilterEngine, FilteredCatalog};

    // Favorites
    pub use crate::favorites::{FavoriteSet, FavoritesStore, LoadState, Toggled};

    // Reviews
    pub use crate::reviews::{Rating, RatingAggregator, RatingDistribution, RatingSummary};

    pub use crate::storefront::Storefront;
}
