//! Product catalog module.
//!
//! Contains the product record and the sources that supply it.

mod product;
mod source;

pub use product::{Product, CARD_NAME_CHARS, CATALOG_CURRENCY, PERCENT_SCALE};
#[cfg(feature = "http")]
pub use source::HttpCatalogSource;
pub use source::{parse_catalog, CatalogSource, StaticCatalogSource, DEFAULT_CATALOG_URL};
