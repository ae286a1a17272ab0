//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the Shop Scout domain.

mod errors;
mod ids;
mod importance;
mod match_score;
mod money;
mod star_rating;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{ProductId, SessionId};
pub use importance::ImportanceWeight;
pub use match_score::MatchScore;
pub use money::Rupees;
pub use star_rating::StarRating;
pub use timestamp::Timestamp;
