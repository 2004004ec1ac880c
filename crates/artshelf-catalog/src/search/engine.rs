//! Filter engine: derives the visible catalog from the current criteria.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::Product;
use crate::search::{BrandFilter, FilterCriteria};

/// Products that passed the filters, borrowed from the full catalog.
pub type FilteredCatalog<'a> = Vec<&'a Product>;

/// Filter the catalog. Pure; preserves catalog order.
///
/// Search text (when not blank) keeps names containing it case-insensitively;
/// a brand other than `All` keeps exact brand matches. Both apply together.
pub fn recompute<'a>(catalog: &'a [Product], criteria: &FilterCriteria) -> FilteredCatalog<'a> {
    matching_indices(catalog, criteria)
        .into_iter()
        .map(|i| &catalog[i])
        .collect()
}

/// Brand picker vocabulary: `All` followed by each distinct brand in the
/// order it first appears in the catalog.
pub fn brand_vocabulary(catalog: &[Product]) -> Vec<BrandFilter> {
    let mut brands = vec![BrandFilter::All];
    for product in catalog {
        let brand = BrandFilter::Brand(product.brand.clone());
        if !brands.contains(&brand) {
            brands.push(brand);
        }
    }
    brands
}

fn matching_indices(catalog: &[Product], criteria: &FilterCriteria) -> Vec<usize> {
    let needle = criteria
        .has_search()
        .then(|| criteria.search_text.to_lowercase());

    catalog
        .iter()
        .enumerate()
        .filter(|(_, product)| criteria.matches(product, needle.as_deref()))
        .map(|(i, _)| i)
        .collect()
}

/// Holds the catalog reference and the criteria, and keeps the filtered view
/// current after every change.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    catalog: Arc<[Product]>,
    criteria: FilterCriteria,
    matches: Vec<usize>,
}

impl FilterEngine {
    /// Create an engine over `catalog` with no filters.
    pub fn new(catalog: impl Into<Arc<[Product]>>) -> Self {
        let mut engine = Self {
            catalog: catalog.into(),
            criteria: FilterCriteria::default(),
            matches: Vec::new(),
        };
        engine.refresh();
        engine
    }

    /// Replace the catalog (e.g. after a fetch), keeping the criteria.
    pub fn set_catalog(&mut self, catalog: impl Into<Arc<[Product]>>) {
        self.catalog = catalog.into();
        self.refresh();
    }

    /// Update the search text and recompute.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
        self.refresh();
    }

    /// Update the brand selection and recompute.
    pub fn set_brand(&mut self, brand: impl Into<BrandFilter>) {
        self.criteria.brand = brand.into();
        self.refresh();
    }

    /// Current criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The full catalog.
    pub fn catalog(&self) -> &Arc<[Product]> {
        &self.catalog
    }

    /// Products passing the current criteria, in catalog order.
    pub fn current(&self) -> FilteredCatalog<'_> {
        self.matches.iter().map(|&i| &self.catalog[i]).collect()
    }

    /// Number of products passing the current criteria.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether nothing passes the current criteria.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Brand picker vocabulary for the current catalog.
    pub fn brands(&self) -> Vec<BrandFilter> {
        brand_vocabulary(&self.catalog)
    }

    fn refresh(&mut self) {
        self.matches = matching_indices(&self.catalog, &self.criteria);
        debug!(
            search = %self.criteria.search_text,
            brand = %self.criteria.brand,
            matched = self.matches.len(),
            total = self.catalog.len(),
            "catalog filter recomputed"
        );
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(Vec::<Product>::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pens() -> Vec<Product> {
        vec![
            Product::new("1", "Red Pen", "A", 1.0),
            Product::new("2", "Blue Pen", "B", 1.0),
            Product::new("3", "Red Marker", "A", 2.0),
        ]
    }

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.art_name.clone()).collect()
    }

    #[test]
    fn test_search_and_brand_compose() {
        let mut engine = FilterEngine::new(pens());
        engine.set_search_text("red");
        engine.set_brand("A");

        assert_eq!(names(&engine.current()), vec!["Red Pen", "Red Marker"]);
        assert!(engine.current().iter().all(|p| p.brand == "A"));
    }

    #[test]
    fn test_cleared_filters_return_full_catalog() {
        let mut engine = FilterEngine::new(pens());
        engine.set_search_text("red");
        engine.set_brand("A");

        engine.set_search_text("");
        engine.set_brand("All");

        assert_eq!(names(&engine.current()), vec!["Red Pen", "Blue Pen", "Red Marker"]);
    }

    #[test]
    fn test_whitespace_search_matches_everything() {
        let catalog = pens();
        let criteria = FilterCriteria::new().with_search_text("   ");
        assert_eq!(recompute(&catalog, &criteria).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = pens();
        let criteria = FilterCriteria::new().with_search_text("PEN");
        assert_eq!(names(&recompute(&catalog, &criteria)), vec!["Red Pen", "Blue Pen"]);

        let criteria = FilterCriteria::new().with_search_text("ed m");
        assert_eq!(names(&recompute(&catalog, &criteria)), vec!["Red Marker"]);
    }

    #[test]
    fn test_unknown_brand_matches_nothing() {
        let catalog = pens();
        let criteria = FilterCriteria::new().with_brand("C");
        assert!(recompute(&catalog, &criteria).is_empty());
    }

    #[test]
    fn test_filter_order_independent() {
        let catalog = pens();
        let mut a = FilterEngine::new(catalog.clone());
        a.set_brand("A");
        a.set_search_text("marker");

        let mut b = FilterEngine::new(catalog);
        b.set_search_text("marker");
        b.set_brand("A");

        assert_eq!(a.current(), b.current());
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn test_brand_vocabulary() {
        let mut catalog = pens();
        catalog.push(Product::new("4", "Charcoal", "C", 3.0));
        catalog.push(Product::new("5", "Eraser", "B", 0.5));

        let labels: Vec<String> = brand_vocabulary(&catalog)
            .iter()
            .map(|b| b.label().to_string())
            .collect();
        assert_eq!(labels, vec!["All", "A", "B", "C"]);
        assert_eq!(brand_vocabulary(&[]), vec![BrandFilter::All]);
    }

    #[test]
    fn test_set_catalog_keeps_criteria() {
        let mut engine = FilterEngine::default();
        engine.set_brand("B");
        assert!(engine.is_empty());

        engine.set_catalog(pens());
        assert_eq!(names(&engine.current()), vec!["Blue Pen"]);
        assert_eq!(engine.criteria().brand.label(), "B");
    }
}
