//! Reply Writer Port - Interface to the text-phrasing backend.
//!
//! The pipeline decides *what* to say; a reply writer decides *how* to
//! phrase it. An external generation service may sit behind this port, so
//! every failure mode here must degrade to a deterministic template reply
//! rather than reach the frontend.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::contradiction::Contradiction;
use crate::domain::foundation::Rupees;

/// What the current turn needs phrased.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyPrompt {
    /// Ask what kind of product the user wants.
    AskCategory,
    /// Ask for a budget, naming the category already known.
    AskBudget { category: String },
    /// Present a contradiction and its resolution options.
    ResolveContradiction { contradiction: Contradiction },
    /// Introduce a ranked recommendation list.
    PresentRecommendations { count: usize },
    /// Nothing in the catalog matched.
    NoResults { category: String, budget: Rupees },
    /// Requirements are complete enough; invite extra detail.
    GeneralClarification,
}

impl ReplyPrompt {
    /// Deterministic canned phrasing for this prompt.
    ///
    /// This is the degraded path the pipeline falls back to when the
    /// phrasing backend fails, and what the template adapter serves as its
    /// normal output.
    pub fn fallback_text(&self) -> String {
        use std::fmt::Write as _;

        match self {
            ReplyPrompt::AskCategory => "I'd be happy to help you find the perfect product! \
                 What type of product are you looking for? \
                 (e.g., laptop, smartphone, headphones, smartwatch, etc.)"
                .to_string(),
            ReplyPrompt::AskBudget { category } => format!(
                "Great! You're looking for {}. What's your budget range for this purchase?",
                category
            ),
            ReplyPrompt::ResolveContradiction { contradiction } => {
                let mut text =
                    String::from("I notice there might be a conflict in your requirements:\n\n");
                let _ = writeln!(text, "Issue: {}\n", contradiction.message);
                text.push_str("Possible solutions:\n");
                for (i, suggestion) in contradiction.suggestions.iter().enumerate() {
                    let _ = writeln!(text, "{}. {}", i + 1, suggestion);
                }
                text.push_str(
                    "\nWhich approach would you prefer? \
                     Or would you like me to explain more about these trade-offs?",
                );
                text
            }
            ReplyPrompt::PresentRecommendations { count } => format!(
                "Perfect! I found {} excellent options that match your needs. \
                 Here are my top recommendations:",
                count
            ),
            ReplyPrompt::NoResults { category, budget } => format!(
                "I'm having trouble finding products that match your requirements for {} \
                 under {}. Would you like to adjust your requirements?",
                category, budget
            ),
            ReplyPrompt::GeneralClarification => "Perfect! I have your basic requirements. \
                 Is there anything specific you'd like me to know about your needs or preferences?"
                .to_string(),
        }
    }
}

/// Errors the phrasing boundary can produce.
#[derive(Debug, Clone, Error)]
pub enum ReplyError {
    #[error("Reply generation timed out")]
    Timeout,

    #[error("Reply backend unavailable: {0}")]
    Unavailable(String),

    #[error("Reply generation quota exhausted")]
    QuotaExceeded,
}

/// Port for phrasing turn replies.
#[async_trait]
pub trait ReplyWriter: Send + Sync {
    /// Produces the user-facing text for one turn.
    async fn compose(&self, prompt: &ReplyPrompt) -> Result<String, ReplyError>;
}
