//! Importance weight value object (1-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// User-assigned priority weight for a product feature.
///
/// 1 means barely relevant, 10 means the single most important thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportanceWeight(u8);

impl ImportanceWeight {
    /// Creates an ImportanceWeight, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=10).contains(&value) {
            return Err(ValidationError::out_of_range(
                "importance_weight",
                1.0,
                10.0,
                value as f64,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric weight.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the weight as a fraction of the maximum (0.1 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Returns true for weights the user considers a top priority.
    pub fn is_top_priority(&self) -> bool {
        self.0 >= 8
    }
}

impl fmt::Display for ImportanceWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}
