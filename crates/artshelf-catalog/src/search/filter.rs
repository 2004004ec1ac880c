//! Filter criteria.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the "no brand filter" choice.
pub const ALL_BRANDS: &str = "All";

/// Brand selection.
///
/// `All` is a sentinel, not a brand: a catalog entry whose brand is literally
/// "All" is still only matched by [`BrandFilter::Brand`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BrandFilter {
    /// No brand filter.
    #[default]
    All,
    /// Exact brand match.
    Brand(String),
}

impl BrandFilter {
    /// Create a brand filter, mapping the `"All"` label to the sentinel.
    pub fn parse(label: &str) -> Self {
        if label == ALL_BRANDS {
            BrandFilter::All
        } else {
            BrandFilter::Brand(label.to_string())
        }
    }

    /// Label as shown in a brand picker.
    pub fn label(&self) -> &str {
        match self {
            BrandFilter::All => ALL_BRANDS,
            BrandFilter::Brand(brand) => brand,
        }
    }

    /// Whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            BrandFilter::All => true,
            BrandFilter::Brand(brand) => product.brand == *brand,
        }
    }
}

impl fmt::Display for BrandFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for BrandFilter {
    fn from(label: &str) -> Self {
        BrandFilter::parse(label)
    }
}

/// Current search text and brand selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free text matched against product names.
    pub search_text: String,
    /// Brand selection.
    pub brand: BrandFilter,
}

impl FilterCriteria {
    /// Criteria that keep everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<BrandFilter>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Whether the search text filter is active. Blank text matches everything.
    pub fn has_search(&self) -> bool {
        !self.search_text.trim().is_empty()
    }

    /// Whether any filter is active.
    pub fn is_empty(&self) -> bool {
        !self.has_search() && self.brand == BrandFilter::All
    }

    /// Whether a product passes both filters.
    ///
    /// `needle` is the lowercased search text, computed once per recompute.
    pub(crate) fn matches(&self, product: &Product, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            if !product.art_name.to_lowercase().contains(needle) {
                return false;
            }
        }
        self.brand.matches(product)
    }
}
