//! Contradiction detection rules.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Rupees;
use crate::domain::requirements::RequirementProfile;

/// Classification of a detected contradiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContradictionKind {
    /// Budget too low for the category's realistic entry level.
    BudgetPerformance,
    /// Budget far beyond what the stated needs call for.
    BudgetOverkill,
    /// Two requested features that work against each other.
    FeatureConflict,
}

/// One detected contradiction with remediation suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contradiction {
    pub kind: ContradictionKind,
    pub message: String,
    pub suggestions: Vec<String>,
}

/// Budget thresholds the detection rules compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContradictionPolicy {
    /// Realistic entry price for gaming laptops.
    pub gaming_entry_budget: Rupees,
    /// Budget above which gaming laptop spending is flagged as overkill.
    pub overkill_budget: Rupees,
}

impl Default for ContradictionPolicy {
    fn default() -> Self {
        Self {
            gaming_entry_budget: Rupees::new(45_000),
            overkill_budget: Rupees::new(200_000),
        }
    }
}

/// Applies the contradiction rules to an accumulated requirement profile.
///
/// Pure and stateless: the same profile always yields the same ordered
/// list, so the detector can be re-run every turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContradictionDetector {
    policy: ContradictionPolicy,
}

impl ContradictionDetector {
    /// Creates a detector with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detector with custom thresholds.
    pub fn with_policy(policy: ContradictionPolicy) -> Self {
        Self { policy }
    }

    /// Returns every contradiction the profile currently contains, in rule
    /// order. The caller surfaces only the first; the rest stay latent
    /// until a later turn.
    pub fn detect(&self, requirements: &RequirementProfile) -> Vec<Contradiction> {
        let mut contradictions = Vec::new();

        if let (Some(budget), Some(category)) = (requirements.budget(), requirements.category()) {
            if category == "gaming laptops" {
                if budget < self.policy.gaming_entry_budget {
                    contradictions.push(self.budget_performance(budget));
                } else if budget > self.policy.overkill_budget {
                    contradictions.push(self.budget_overkill(budget));
                }
            }
        }

        let must_haves = requirements.must_have_features().join(" ").to_lowercase();
        let gaming_use = requirements
            .use_case()
            .map(|u| u.contains("gaming"))
            .unwrap_or(false);
        if must_haves.contains("long battery life") && gaming_use {
            contradictions.push(self.feature_conflict());
        }

        contradictions
    }

    fn budget_performance(&self, budget: Rupees) -> Contradiction {
        Contradiction {
            kind: ContradictionKind::BudgetPerformance,
            message: format!(
                "Gaming laptops under {} typically have very limited gaming performance. \
                 Entry-level gaming usually starts around {}.",
                budget, self.policy.gaming_entry_budget
            ),
            suggestions: vec![
                format!(
                    "Increase budget to {}-{} for basic gaming",
                    self.policy.gaming_entry_budget,
                    self.policy.gaming_entry_budget + Rupees::new(5_000)
                ),
                "Consider older or refurbished gaming laptops".to_string(),
                "Look at regular laptops with integrated graphics for light gaming".to_string(),
            ],
        }
    }

    fn budget_overkill(&self, budget: Rupees) -> Contradiction {
        Contradiction {
            kind: ContradictionKind::BudgetOverkill,
            message: format!(
                "A {} budget can get you professional gaming/workstation laptops. \
                 This might be overkill for casual gaming.",
                budget
            ),
            suggestions: vec![
                "Consider what games you actually play".to_string(),
                "₹60,000-80,000 handles most games excellently".to_string(),
                "Invest saved money in accessories (monitor, keyboard, mouse)".to_string(),
            ],
        }
    }

    fn feature_conflict(&self) -> Contradiction {
        Contradiction {
            kind: ContradictionKind::FeatureConflict,
            message: "Gaming laptops typically have poor battery life during gaming (2-3 hours). \
                      Long battery life and gaming performance are conflicting requirements."
                .to_string(),
            suggestions: vec![
                "Prioritize either gaming performance or battery life".to_string(),
                "Consider laptops with hybrid graphics for better battery".to_string(),
                "Plan to use the laptop plugged in for gaming".to_string(),
            ],
        }
    }
}
