//! Aggregated review data attached to a candidate product.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::StarRating;

/// Review summary with per-category rating breakdown.
///
/// Category names are provider-defined snake_case keys such as
/// `performance`, `battery_life`, or `value_for_money`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    /// Aggregate rating across all reviews.
    pub overall: StarRating,
    /// Number of reviews behind the aggregate.
    pub total_reviews: u32,
    /// Per-category rating breakdown.
    pub category_ratings: BTreeMap<String, StarRating>,
}

impl ReviewSummary {
    /// Creates a review summary.
    pub fn new(
        overall: StarRating,
        total_reviews: u32,
        category_ratings: BTreeMap<String, StarRating>,
    ) -> Self {
        Self {
            overall,
            total_reviews,
            category_ratings,
        }
    }

    /// Looks up the rating for one category.
    pub fn rating_for(&self, category: &str) -> Option<StarRating> {
        self.category_ratings.get(category).copied()
    }
}
