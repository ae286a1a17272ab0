//! Ranking of scored candidates.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::{insight, MatchScorer, Recommendation};
use crate::domain::catalog::Product;
use crate::domain::foundation::ImportanceWeight;
use crate::domain::requirements::RequirementProfile;

/// Scores, explains, and ranks the Catalog Provider's candidates.
///
/// Deterministic for identical inputs; ties keep candidate input order
/// (the sort is stable, and no further tie-break is defined).
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine {
    scorer: MatchScorer,
    max_recommendations: usize,
}

impl RecommendationEngine {
    /// Creates an engine that presents at most three recommendations.
    pub fn new() -> Self {
        Self {
            scorer: MatchScorer::new(),
            max_recommendations: 3,
        }
    }

    /// Overrides how many candidates one pass considers.
    pub fn with_max_recommendations(mut self, max: usize) -> Self {
        self.max_recommendations = max;
        self
    }

    /// Ranks candidates against the requirements, best match first.
    ///
    /// An empty candidate list yields an empty ranking; the caller turns
    /// that into a no-results reply.
    pub fn recommend(
        &self,
        requirements: &RequirementProfile,
        priorities: &BTreeMap<String, ImportanceWeight>,
        candidates: &[Product],
    ) -> Vec<Recommendation> {
        let shortlist: Vec<&Product> = candidates.iter().take(self.max_recommendations).collect();

        let mut recommendations: Vec<Recommendation> = shortlist
            .iter()
            .map(|product| self.build(product, requirements, priorities, &shortlist))
            .collect();

        recommendations.sort_by(|a, b| {
            b.match_score
                .value()
                .partial_cmp(&a.match_score.value())
                .unwrap_or(Ordering::Equal)
        });

        recommendations
    }

    fn build(
        &self,
        product: &Product,
        requirements: &RequirementProfile,
        priorities: &BTreeMap<String, ImportanceWeight>,
        batch: &[&Product],
    ) -> Recommendation {
        let match_score = self.scorer.score(product, requirements, priorities);

        Recommendation {
            product: product.clone(),
            match_score,
            confidence: match_score.confidence(),
            reasoning: insight::reasoning(product, requirements, priorities),
            trade_offs: insight::trade_offs(product),
            deal_highlights: insight::deal_highlights(product),
            savings_amount: product.price.savings(),
            urgency_factors: insight::urgency_factors(product),
            why_better_than_alternatives: insight::better_than_alternatives(product, batch),
            what_you_might_miss: insight::what_you_might_miss(product),
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}
