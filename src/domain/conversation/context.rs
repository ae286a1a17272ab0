//! Per-session conversation state.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::contradiction::Contradiction;
use crate::domain::foundation::{ImportanceWeight, SessionId, Timestamp};
use crate::domain::requirements::{RequirementDelta, RequirementProfile};

use super::InteractionKind;

/// One audit entry: what a raw message contributed to the profile.
///
/// Appended every turn and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    pub at: Timestamp,
    pub raw_message: String,
    pub extracted: RequirementDelta,
}

/// One clarifying interaction shown to the user.
///
/// Kept so the strategy can avoid repeating a question type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarificationRecord {
    pub at: Timestamp,
    pub kind: InteractionKind,
}

/// One contradiction presented to the user, with the options offered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContradictionRecord {
    pub at: Timestamp,
    pub contradiction: Contradiction,
}

/// Everything the assistant knows about one conversation.
///
/// Owned exclusively by the Session Store; mutated only through the
/// per-turn pipeline. `current_requirements` is always the right-biased
/// fold of the extraction history (brand lists append).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationContext {
    pub session_id: SessionId,
    pub started_at: Timestamp,
    current_requirements: RequirementProfile,
    requirements_history: Vec<ExtractionRecord>,
    clarification_history: Vec<ClarificationRecord>,
    priority_rankings: BTreeMap<String, ImportanceWeight>,
    deal_breakers: BTreeSet<String>,
    nice_to_haves: BTreeSet<String>,
    contradictions_resolved: Vec<ContradictionRecord>,
}

impl ConversationContext {
    /// Creates fresh state for a new session.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            started_at: Timestamp::now(),
            current_requirements: RequirementProfile::new(),
            requirements_history: Vec::new(),
            clarification_history: Vec::new(),
            priority_rankings: BTreeMap::new(),
            deal_breakers: BTreeSet::new(),
            nice_to_haves: BTreeSet::new(),
            contradictions_resolved: Vec::new(),
        }
    }

    /// The accumulated requirement profile.
    pub fn requirements(&self) -> &RequirementProfile {
        &self.current_requirements
    }

    /// The full extraction audit trail, oldest first.
    pub fn requirements_history(&self) -> &[ExtractionRecord] {
        &self.requirements_history
    }

    /// Clarifying interactions shown so far, oldest first.
    pub fn clarification_history(&self) -> &[ClarificationRecord] {
        &self.clarification_history
    }

    /// Contradictions presented so far, oldest first.
    pub fn contradictions_resolved(&self) -> &[ContradictionRecord] {
        &self.contradictions_resolved
    }

    /// User-assigned feature priorities.
    pub fn priority_rankings(&self) -> &BTreeMap<String, ImportanceWeight> {
        &self.priority_rankings
    }

    /// Number of user turns processed so far.
    pub fn turn_count(&self) -> usize {
        self.requirements_history.len()
    }

    /// Appends one turn to the audit trail and merges its delta.
    pub fn record_turn(&mut self, raw_message: impl Into<String>, extracted: RequirementDelta) {
        self.current_requirements.apply(&extracted);
        self.requirements_history.push(ExtractionRecord {
            at: Timestamp::now(),
            raw_message: raw_message.into(),
            extracted,
        });
    }

    /// Records that a clarifying question of the given kind was asked.
    pub fn record_clarification(&mut self, kind: InteractionKind) {
        self.clarification_history.push(ClarificationRecord {
            at: Timestamp::now(),
            kind,
        });
    }

    /// Returns true if a question of this kind was already asked.
    pub fn has_asked(&self, kind: InteractionKind) -> bool {
        self.clarification_history.iter().any(|r| r.kind == kind)
    }

    /// Records that a contradiction was presented to the user.
    pub fn record_contradiction(&mut self, contradiction: Contradiction) {
        self.contradictions_resolved.push(ContradictionRecord {
            at: Timestamp::now(),
            contradiction,
        });
    }

    /// Sets (or replaces) the importance of one feature.
    pub fn set_priority(&mut self, feature: impl Into<String>, weight: ImportanceWeight) {
        self.priority_rankings.insert(feature.into(), weight);
    }

    /// Adds a feature that would make the user reject a product outright.
    pub fn add_deal_breaker(&mut self, feature: impl Into<String>) {
        self.deal_breakers.insert(feature.into());
    }

    /// Adds a feature the user would enjoy but does not require.
    pub fn add_nice_to_have(&mut self, feature: impl Into<String>) {
        self.nice_to_haves.insert(feature.into());
    }

    /// Snapshot handed to the frontend alongside recommendations.
    pub fn summary(&self) -> ConversationSummary {
        ConversationSummary {
            requirements: self.current_requirements.clone(),
            priorities: self.priority_rankings.clone(),
            deal_breakers: self.deal_breakers.iter().cloned().collect(),
            nice_to_haves: self.nice_to_haves.iter().cloned().collect(),
            expertise_level: self
                .current_requirements
                .expertise_level()
                .map(|s| s.to_string()),
            conversation_turns: self.turn_count(),
        }
    }
}

/// What the conversation gathered, condensed for the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub requirements: RequirementProfile,
    pub priorities: BTreeMap<String, ImportanceWeight>,
    pub deal_breakers: Vec<String>,
    pub nice_to_haves: Vec<String>,
    pub expertise_level: Option<String>,
    pub conversation_turns: usize,
}
