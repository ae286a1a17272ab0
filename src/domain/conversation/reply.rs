//! Turn result shapes consumed by the Rendering Frontend.

use serde::{Deserialize, Serialize};

use super::ConversationSummary;
use crate::domain::recommendation::Recommendation;

/// What kind of turn the frontend is rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// A clarifying question (category, budget, or generic).
    Clarification,
    /// A contradiction presented with resolution options.
    ContradictionResolution,
    /// A ranked recommendation list.
    Recommendations,
    /// The catalog had nothing to offer for the stated requirements.
    NoResults,
}

/// One turn's structured result.
///
/// Either a prompt that needs another user message, or a ranked
/// recommendation list that ends the gathering phase. The core never
/// renders; it only returns these shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TurnReply {
    /// Clarification, contradiction, or no-results turn.
    Prompt {
        response_text: String,
        interaction_type: InteractionKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        options: Option<Vec<String>>,
        requires_user_input: bool,
    },
    /// Recommendation turn.
    Recommendations {
        response_text: String,
        interaction_type: InteractionKind,
        recommendations: Vec<Recommendation>,
        conversation_summary: ConversationSummary,
    },
}

impl TurnReply {
    /// Builds a prompt turn without structured options.
    pub fn prompt(response_text: impl Into<String>, interaction_type: InteractionKind) -> Self {
        TurnReply::Prompt {
            response_text: response_text.into(),
            interaction_type,
            options: None,
            requires_user_input: true,
        }
    }

    /// Builds a prompt turn carrying selectable options.
    pub fn prompt_with_options(
        response_text: impl Into<String>,
        interaction_type: InteractionKind,
        options: Vec<String>,
    ) -> Self {
        TurnReply::Prompt {
            response_text: response_text.into(),
            interaction_type,
            options: Some(options),
            requires_user_input: true,
        }
    }

    /// Builds a recommendation turn.
    pub fn recommendations(
        response_text: impl Into<String>,
        recommendations: Vec<Recommendation>,
        conversation_summary: ConversationSummary,
    ) -> Self {
        TurnReply::Recommendations {
            response_text: response_text.into(),
            interaction_type: InteractionKind::Recommendations,
            recommendations,
            conversation_summary,
        }
    }

    /// The text shown to the user this turn.
    pub fn response_text(&self) -> &str {
        match self {
            TurnReply::Prompt { response_text, .. } => response_text,
            TurnReply::Recommendations { response_text, .. } => response_text,
        }
    }

    /// The interaction kind of this turn.
    pub fn interaction_type(&self) -> InteractionKind {
        match self {
            TurnReply::Prompt {
                interaction_type, ..
            } => *interaction_type,
            TurnReply::Recommendations {
                interaction_type, ..
            } => *interaction_type,
        }
    }

    /// True when the turn ends with a question back to the user.
    pub fn requires_user_input(&self) -> bool {
        match self {
            TurnReply::Prompt {
                requires_user_input,
                ..
            } => *requires_user_input,
            TurnReply::Recommendations { .. } => false,
        }
    }
}
