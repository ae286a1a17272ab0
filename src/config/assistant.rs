//! Assistant tuning configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::contradiction::ContradictionPolicy;
use crate::domain::foundation::Rupees;
use crate::domain::recommendation::RecommendationEngine;

/// Tunable knobs for the conversation and ranking pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// How many candidates one ranking pass presents.
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,

    /// Realistic entry price for gaming laptops (rupees).
    #[serde(default = "default_gaming_entry_budget")]
    pub gaming_entry_budget: u64,

    /// Budget above which gaming laptop spending is flagged as overkill
    /// (rupees).
    #[serde(default = "default_overkill_budget")]
    pub overkill_budget: u64,
}

fn default_max_recommendations() -> usize {
    3
}

fn default_gaming_entry_budget() -> u64 {
    45_000
}

fn default_overkill_budget() -> u64 {
    200_000
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            max_recommendations: default_max_recommendations(),
            gaming_entry_budget: default_gaming_entry_budget(),
            overkill_budget: default_overkill_budget(),
        }
    }
}

impl AssistantConfig {
    /// Validate the configured values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_recommendations == 0 {
            return Err(ValidationError::NoRecommendations);
        }
        if self.gaming_entry_budget >= self.overkill_budget {
            return Err(ValidationError::InvertedBudgetThresholds);
        }
        Ok(())
    }

    /// The contradiction thresholds this configuration describes.
    pub fn contradiction_policy(&self) -> ContradictionPolicy {
        ContradictionPolicy {
            gaming_entry_budget: Rupees::new(self.gaming_entry_budget),
            overkill_budget: Rupees::new(self.overkill_budget),
        }
    }

    /// A recommendation engine sized per this configuration.
    pub fn recommendation_engine(&self) -> RecommendationEngine {
        RecommendationEngine::new().with_max_recommendations(self.max_recommendations)
    }
}
