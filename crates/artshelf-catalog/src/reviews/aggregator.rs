//! Per-product rating lists and the statistics derived from them.

use std::collections::HashMap;

use tracing::debug;

use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::reviews::{round_average, Rating, RatingDistribution, RatingSummary, NO_RATINGS_AVERAGE};

/// Session-scoped ratings for every product the user has looked at.
///
/// Nothing here is persisted. A product's list is seeded from the fixture the
/// first time it is opened (or rated) and only grows afterwards. Statistics
/// are recomputed from the list on every call.
#[derive(Debug, Clone, Default)]
pub struct RatingAggregator {
    fixture: Vec<Rating>,
    ratings: HashMap<ProductId, Vec<Rating>>,
}

impl RatingAggregator {
    /// An aggregator that starts every product with no ratings.
    pub fn new() -> Self {
        Self::default()
    }

    /// An aggregator that seeds every product with `fixture`.
    pub fn with_fixture(fixture: Vec<Rating>) -> Self {
        Self {
            fixture,
            ratings: HashMap::new(),
        }
    }

    /// The mock reviews every product detail starts with.
    pub fn default_fixture() -> Vec<Rating> {
        vec![
            Rating {
                user: "Thắng".to_string(),
                score: 5,
                comment: "Màu chất lượng".to_string(),
            },
            Rating {
                user: "Việt".to_string(),
                score: 4,
                comment: "Sản phẩm đa dạng màu sắc".to_string(),
            },
        ]
    }

    /// Start viewing a product: seed its list if this is the first visit.
    pub fn open(&mut self, product_id: &ProductId) -> &[Rating] {
        self.entry(product_id)
    }

    /// Append a rating after validating it.
    ///
    /// Fails with [`CatalogError::Validation`] when no star was selected, the
    /// score is off the scale, or the comment is blank. Rejected submissions
    /// leave the list untouched.
    pub fn add_rating(
        &mut self,
        product_id: &ProductId,
        score: u8,
        comment: impl Into<String>,
        user: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let rating = Rating::new(user, score, comment).map_err(|e| {
            debug!(product_id = %product_id, score, reason = %e, "rating rejected");
            e
        })?;
        self.entry(product_id).push(rating);
        debug!(product_id = %product_id, score, "rating added");
        Ok(())
    }

    /// Ratings recorded for a product, oldest first.
    pub fn ratings(&self, product_id: &ProductId) -> &[Rating] {
        self.ratings
            .get(product_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of ratings recorded for a product.
    pub fn rating_count(&self, product_id: &ProductId) -> usize {
        self.ratings(product_id).len()
    }

    /// Mean score, rounded to one decimal; [`NO_RATINGS_AVERAGE`] when empty.
    pub fn average_rating(&self, product_id: &ProductId) -> f64 {
        let ratings = self.ratings(product_id);
        if ratings.is_empty() {
            return NO_RATINGS_AVERAGE;
        }
        let total: u32 = ratings.iter().map(|r| u32::from(r.score)).sum();
        round_average(f64::from(total) / ratings.len() as f64)
    }

    /// Count per score; every score is present.
    pub fn histogram(&self, product_id: &ProductId) -> RatingDistribution {
        RatingDistribution::from_ratings(self.ratings(product_id))
    }

    /// Average, total and distribution together.
    pub fn summary(&self, product_id: &ProductId) -> RatingSummary {
        let distribution = self.histogram(product_id);
        RatingSummary {
            product_id: product_id.clone(),
            average_rating: self.average_rating(product_id),
            total_ratings: distribution.total(),
            distribution,
        }
    }

    fn entry(&mut self, product_id: &ProductId) -> &mut Vec<Rating> {
        let fixture = &self.fixture;
        self.ratings
            .entry(product_id.clone())
            .or_insert_with(|| fixture.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> ProductId {
        ProductId::new("7")
    }

    #[test]
    fn test_rejects_missing_selection_and_blank_comment() {
        let mut ratings = RatingAggregator::new();

        let err = ratings.add_rating(&id(), 0, "great", "u").unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        let err = ratings.add_rating(&id(), 3, "", "u").unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));

        assert_eq!(ratings.rating_count(&id()), 0);
    }

    #[test]
    fn test_add_updates_average() {
        let mut ratings = RatingAggregator::new();
        assert_eq!(ratings.average_rating(&id()), NO_RATINGS_AVERAGE);

        ratings.add_rating(&id(), 5, "nice", "u").unwrap();
        assert_eq!(ratings.average_rating(&id()), 5.0);

        ratings.add_rating(&id(), 2, "meh", "v").unwrap();
        assert_eq!(ratings.average_rating(&id()), 3.5);
    }

    #[test]
    fn test_histogram_total_matches_count() {
        let mut ratings = RatingAggregator::with_fixture(RatingAggregator::default_fixture());
        ratings.open(&id());
        for score in [1, 3, 3, 5] {
            ratings.add_rating(&id(), score, "c", "u").unwrap();
        }

        let histogram = ratings.histogram(&id());
        assert_eq!(histogram.total() as usize, ratings.rating_count(&id()));
        assert_eq!(histogram.count(5), 2);
        assert_eq!(histogram.count(3), 2);
        assert_eq!(histogram.count(2), 0);
    }

    #[test]
    fn test_fixture_seeded_once() {
        let mut ratings = RatingAggregator::with_fixture(RatingAggregator::default_fixture());
        assert_eq!(ratings.open(&id()).len(), 2);
        assert_eq!(ratings.average_rating(&id()), 4.5);

        ratings.add_rating(&id(), 3, "ok", "Bao").unwrap();
        assert_eq!(ratings.open(&id()).len(), 3);
        // 12 / 3
        assert_eq!(ratings.average_rating(&id()), 4.0);
    }

    #[test]
    fn test_products_are_independent() {
        let mut ratings = RatingAggregator::new();
        let other = ProductId::new("8");
        ratings.add_rating(&id(), 1, "bad", "u").unwrap();

        assert_eq!(ratings.rating_count(&other), 0);
        assert_eq!(ratings.histogram(&other).total(), 0);
    }

    #[test]
    fn test_summary() {
        let mut ratings = RatingAggregator::new();
        ratings.add_rating(&id(), 4, "good", "u").unwrap();
        ratings.add_rating(&id(), 5, "great", "v").unwrap();
        ratings.add_rating(&id(), 5, "best", "w").unwrap();

        let summary = ratings.summary(&id());
        assert!(summary.has_ratings());
        assert_eq!(summary.total_ratings, 3);
        assert_eq!(summary.average_rating, 4.7);
        assert_eq!(summary.distribution.five_star, 2);
    }
}
