//! Star rating value object (0.0 to 5.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Review rating on the familiar five-star scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarRating(f64);

impl StarRating {
    /// Maximum possible rating.
    pub const MAX: Self = Self(5.0);

    /// Creates a new StarRating, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 5.0))
    }

    /// Creates a StarRating, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=5.0).contains(&value) {
            return Err(ValidationError::out_of_range("star_rating", 0.0, 5.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the rating value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the rating as a fraction of the maximum (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 5.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}/5.0", self.0)
    }
}
