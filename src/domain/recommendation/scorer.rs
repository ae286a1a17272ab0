//! Match score computation.

use std::collections::BTreeMap;

use crate::domain::catalog::Product;
use crate::domain::foundation::{ImportanceWeight, MatchScore, Rupees};
use crate::domain::requirements::RequirementProfile;

const BUDGET_WEIGHT: f64 = 1.5;
const REVIEW_WEIGHT: f64 = 1.25;
const PRIORITY_WEIGHT: f64 = 1.5;
const DEAL_WEIGHT: f64 = 0.75;

/// Computes how well one candidate fits the accumulated requirements.
///
/// The score is a weighted blend of budget fit, review quality, priority
/// fit, and deal quality, rescaled to [0, 5]. Deterministic for identical
/// inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchScorer;

impl MatchScorer {
    /// Creates a new scorer.
    pub fn new() -> Self {
        Self
    }

    /// Scores one candidate.
    pub fn score(
        &self,
        product: &Product,
        requirements: &RequirementProfile,
        priorities: &BTreeMap<String, ImportanceWeight>,
    ) -> MatchScore {
        let mut score = 0.0;
        let mut total_weight = 0.0;

        if let Some(budget) = requirements.budget() {
            if budget.value() > 0 {
                score += Self::budget_fit(product.price.current, budget);
            }
        }
        total_weight += BUDGET_WEIGHT;

        score += REVIEW_WEIGHT * product.reviews.overall.as_fraction();
        total_weight += REVIEW_WEIGHT;

        for (feature, importance) in priorities {
            if let Some(rating) = product.reviews.rating_for(&normalize_feature(feature)) {
                score += importance.as_fraction() * rating.as_fraction() * 0.3;
            }
        }
        total_weight += PRIORITY_WEIGHT;

        score += DEAL_WEIGHT * (product.price.discount_percentage / 100.0);
        total_weight += DEAL_WEIGHT;

        if total_weight > 0.0 {
            MatchScore::new(score / total_weight * 5.0)
        } else {
            MatchScore::NEUTRAL
        }
    }

    /// The budget-fit term of the blend.
    ///
    /// Under budget rewards headroom: `1.5 × (1 − 0.5 × price/budget)`.
    /// Over budget decays linearly from the at-budget value down to 0 as
    /// the overage approaches the full budget, floored at 0 - so a
    /// candidate at exactly the budget always beats one a rupee over.
    pub fn budget_fit(price: Rupees, budget: Rupees) -> f64 {
        let price = price.as_f64();
        let budget = budget.as_f64();
        if price <= budget {
            BUDGET_WEIGHT * (1.0 - 0.5 * price / budget)
        } else {
            let at_budget = BUDGET_WEIGHT * 0.5;
            let overage = (price - budget) / budget;
            (at_budget * (1.0 - overage)).max(0.0)
        }
    }
}

/// Normalizes a user-facing feature name to the provider's rating keys
/// ("Battery Life" -> "battery_life").
pub(crate) fn normalize_feature(feature: &str) -> String {
    feature.to_lowercase().replace(' ', "_")
}
