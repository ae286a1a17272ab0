//! Recommendation module - Scoring and ranking candidates against the
//! accumulated requirements.
//!
//! Everything here is derived and ephemeral: a ranking pass reads the
//! requirement profile plus the Catalog Provider's candidates and produces
//! scored, explained recommendations. Nothing is persisted between passes.

mod engine;
mod insight;
mod recommendation;
mod scorer;

pub use engine::RecommendationEngine;
pub use recommendation::Recommendation;
pub use scorer::MatchScorer;
