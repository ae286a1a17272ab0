//! Conversation module - Per-session state and dialogue strategy.
//!
//! A conversation is a sequence of turns. Each turn merges newly extracted
//! requirements into the session's profile, re-derives the dialogue state,
//! and produces one structured reply for the Rendering Frontend.

mod context;
mod reply;
mod state;

pub use context::{
    ClarificationRecord, ContradictionRecord, ConversationContext, ConversationSummary,
    ExtractionRecord,
};
pub use reply::{InteractionKind, TurnReply};
pub use state::DialogueState;
