//! Match score value object (0.0 to 5.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// How well a candidate product fits the accumulated requirements.
///
/// Always within [0, 5]; construction clamps rather than fails because the
/// score is the end of a numeric pipeline, not user input.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchScore(f64);

impl MatchScore {
    /// Neutral score used when no scoring signal was available.
    pub const NEUTRAL: Self = Self(3.0);

    /// Creates a new MatchScore, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 5.0))
    }

    /// Returns the score value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Recommendation confidence derived from the score, capped at 0.95.
    pub fn confidence(&self) -> f64 {
        (self.0 / 5.0 + 0.5).min(0.95)
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}/5.0", self.0)
    }
}
