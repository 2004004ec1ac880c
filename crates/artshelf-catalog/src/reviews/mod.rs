//! Reviews module.
//!
//! Session-scoped ratings and comments, with averages and per-score counts.

mod aggregator;
mod rating;

pub use aggregator::RatingAggregator;
pub use rating::{
    render_stars, round_average, validate, Rating, RatingDistribution, RatingSummary,
    AVERAGE_DECIMALS, MAX_SCORE, MIN_SCORE, NO_RATINGS_AVERAGE, NO_SELECTION,
};
