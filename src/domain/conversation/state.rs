//! Dialogue strategy state machine.
//!
//! The state is never persisted: it is a pure function of the merged
//! requirement profile and the contradictions detected this turn,
//! recomputed fresh every turn. That keeps the machine robust to
//! requirements being corrected or retracted mid-conversation.

use serde::{Deserialize, Serialize};

use crate::domain::contradiction::Contradiction;
use crate::domain::requirements::RequirementProfile;

/// The next dialogue move, decided once per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    /// A contradiction must be resolved before anything else advances.
    ContradictionPending,
    /// No product category known yet; ask for one.
    NeedsCategory,
    /// Category known, budget missing; ask for it.
    NeedsBudget,
    /// Enough information gathered; hand off to the recommendation engine.
    ReadyToRecommend,
    /// Catch-all clarification state.
    Clarifying,
}

impl DialogueState {
    /// Decides the next dialogue move from current facts.
    ///
    /// Contradictions supersede the main progression. Note that a budget,
    /// once set, is not invalidated by a later category change.
    pub fn decide(
        requirements: &RequirementProfile,
        contradictions: &[Contradiction],
    ) -> DialogueState {
        if !contradictions.is_empty() {
            return DialogueState::ContradictionPending;
        }

        let has_category = requirements.category().is_some();
        let has_budget = requirements.budget().is_some();

        match (has_category, has_budget) {
            (true, true) => DialogueState::ReadyToRecommend,
            (false, _) => DialogueState::NeedsCategory,
            (true, false) => DialogueState::NeedsBudget,
        }
    }

    /// Returns true when this turn ends with a question to the user.
    pub fn requires_user_input(&self) -> bool {
        !matches!(self, DialogueState::ReadyToRecommend)
    }
}
