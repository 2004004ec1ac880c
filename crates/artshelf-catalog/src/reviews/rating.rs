//! Rating records and rating statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::ids::ProductId;

/// Lowest score a user can give.
pub const MIN_SCORE: u8 = 1;

/// Highest score a user can give.
pub const MAX_SCORE: u8 = 5;

/// Score value meaning "no star selected yet".
pub const NO_SELECTION: u8 = 0;

/// Decimal places kept in an average rating.
pub const AVERAGE_DECIMALS: i32 = 1;

/// Average reported for a product with no ratings.
pub const NO_RATINGS_AVERAGE: f64 = 0.0;

/// A single user rating with its comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Display name of the author.
    pub user: String,
    /// Stars, in `MIN_SCORE..=MAX_SCORE`.
    #[serde(alias = "rating")]
    pub score: u8,
    /// Free-text comment.
    pub comment: String,
}

impl Rating {
    /// Build a rating, rejecting a missing star selection, an out-of-range
    /// score, or a blank comment.
    pub fn new(
        user: impl Into<String>,
        score: u8,
        comment: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let comment = comment.into();
        validate(score, &comment)?;
        Ok(Self {
            user: user.into(),
            score,
            comment,
        })
    }

    /// Render the score as filled and empty stars.
    pub fn render_stars(&self) -> String {
        render_stars(self.score)
    }
}

/// Check a submission. Messages are written for the person submitting.
pub fn validate(score: u8, comment: &str) -> Result<(), CatalogError> {
    if score == NO_SELECTION {
        return Err(CatalogError::Validation(
            "Please select a rating.".to_string(),
        ));
    }
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(CatalogError::Validation(format!(
            "Rating must be between {} and {} stars.",
            MIN_SCORE, MAX_SCORE
        )));
    }
    if comment.trim().is_empty() {
        return Err(CatalogError::Validation(
            "Please provide a comment.".to_string(),
        ));
    }
    Ok(())
}

/// Render `score` out of [`MAX_SCORE`] as stars.
pub fn render_stars(score: u8) -> String {
    let filled = score.min(MAX_SCORE) as usize;
    let empty = MAX_SCORE as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Round to [`AVERAGE_DECIMALS`] places.
pub fn round_average(value: f64) -> f64 {
    let factor = 10f64.powi(AVERAGE_DECIMALS);
    (value * factor).round() / factor
}

/// Distribution of ratings (1-5 stars).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RatingDistribution {
    pub five_star: u32,
    pub four_star: u32,
    pub three_star: u32,
    pub two_star: u32,
    pub one_star: u32,
}

impl RatingDistribution {
    /// Count every rating in `ratings`.
    pub fn from_ratings<'a>(ratings: impl IntoIterator<Item = &'a Rating>) -> Self {
        let mut distribution = Self::default();
        for rating in ratings {
            distribution.record(rating.score);
        }
        distribution
    }

    /// Count one score. Scores outside the scale are ignored.
    pub fn record(&mut self, stars: u8) {
        if let Some(slot) = self.slot_mut(stars) {
            *slot += 1;
        }
    }

    /// Number of ratings with exactly `stars`.
    pub fn count(&self, stars: u8) -> u32 {
        match stars {
            5 => self.five_star,
            4 => self.four_star,
            3 => self.three_star,
            2 => self.two_star,
            1 => self.one_star,
            _ => 0,
        }
    }

    /// Total number of ratings counted.
    pub fn total(&self) -> u32 {
        self.five_star + self.four_star + self.three_star + self.two_star + self.one_star
    }

    /// Get percentage for a rating level.
    pub fn percentage(&self, stars: u8) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.count(stars) as f32 / total as f32) * 100.0
    }

    /// Counts keyed by score; every score on the scale is present.
    pub fn as_map(&self) -> BTreeMap<u8, u32> {
        (MIN_SCORE..=MAX_SCORE)
            .map(|stars| (stars, self.count(stars)))
            .collect()
    }

    fn slot_mut(&mut self, stars: u8) -> Option<&mut u32> {
        match stars {
            5 => Some(&mut self.five_star),
            4 => Some(&mut self.four_star),
            3 => Some(&mut self.three_star),
            2 => Some(&mut self.two_star),
            1 => Some(&mut self.one_star),
            _ => None,
        }
    }
}

/// Rating summary for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub product_id: ProductId,
    /// Mean score rounded to one decimal, or [`NO_RATINGS_AVERAGE`].
    pub average_rating: f64,
    pub total_ratings: u32,
    pub distribution: RatingDistribution,
}

impl RatingSummary {
    /// Whether the product has any ratings.
    pub fn has_ratings(&self) -> bool {
        self.total_ratings > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let err = Rating::new("u", 0, "great").unwrap_err();
        assert_eq!(err.to_string(), "Please select a rating.");

        let err = Rating::new("u", 3, "  ").unwrap_err();
        assert_eq!(err.to_string(), "Please provide a comment.");

        assert!(matches!(
            Rating::new("u", 6, "too many"),
            Err(CatalogError::Validation(_))
        ));
        assert!(Rating::new("u", 1, "meh").is_ok());
    }

    #[test]
    fn test_render_stars() {
        assert_eq!(render_stars(3), "★★★☆☆");
        assert_eq!(render_stars(0), "☆☆☆☆☆");
    }

    #[test]
    fn test_round_average() {
        assert_eq!(round_average(4.25), 4.3);
        assert_eq!(round_average(4.0), 4.0);
        assert_eq!(round_average(11.0 / 3.0), 3.7);
    }

    #[test]
    fn test_distribution_map_has_all_scores() {
        let ratings = vec![
            Rating::new("a", 5, "x").unwrap(),
            Rating::new("b", 5, "y").unwrap(),
            Rating::new("c", 2, "z").unwrap(),
        ];
        let distribution = RatingDistribution::from_ratings(&ratings);
        let map = distribution.as_map();

        assert_eq!(map.len(), 5);
        assert_eq!(map[&5], 2);
        assert_eq!(map[&2], 1);
        assert_eq!(map[&1], 0);
        assert_eq!(distribution.total(), 3);
        assert!((distribution.percentage(5) - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_accepts_legacy_field_name() {
        let rating: Rating =
            serde_json::from_str(r#"{"user": "Việt", "rating": 4, "comment": "ok"}"#).unwrap();
        assert_eq!(rating.score, 4);
    }
}
