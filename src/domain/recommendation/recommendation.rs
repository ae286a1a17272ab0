//! The recommendation result shape.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::catalog::Product;
use crate::domain::foundation::{MatchScore, Rupees};

/// One scored, explained candidate in a ranking pass.
///
/// Derived and ephemeral: recomputed on every pass, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The candidate this recommendation is about.
    pub product: Product,
    /// Fit against the accumulated requirements, 0 to 5.
    pub match_score: MatchScore,
    /// How sure the assistant is about this pick, 0 to 1.
    pub confidence: f64,
    /// Why this product, at most four reasons in priority order.
    pub reasoning: Vec<String>,
    /// Rating category to caveat, for categories rated below 4.0.
    pub trade_offs: BTreeMap<String, String>,
    /// Deal callouts worth surfacing next to the price.
    pub deal_highlights: Vec<String>,
    /// Amount saved versus the original price.
    pub savings_amount: Rupees,
    /// Signals that buying sooner is sensible.
    pub urgency_factors: Vec<String>,
    /// Comparative advantages over the other ranked candidates.
    pub why_better_than_alternatives: Vec<String>,
    /// Standout strengths a cheaper alternative would lack.
    pub what_you_might_miss: Vec<String>,
}
