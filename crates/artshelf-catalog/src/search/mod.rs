//! Search module.
//!
//! Contains the filter criteria and the engine that applies them.

mod engine;
mod filter;

pub use engine::{brand_vocabulary, recompute, FilterEngine, FilteredCatalog};
pub use filter::{BrandFilter, FilterCriteria, ALL_BRANDS};
