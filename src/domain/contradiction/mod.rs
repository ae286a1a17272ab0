//! Contradiction module - Detection of unsatisfiable requirement
//! combinations.
//!
//! A contradiction is a pair of stated constraints that cannot both hold in
//! practice (a rock-bottom budget for a gaming laptop, long battery life
//! while gaming). Detection is stateless and idempotent; the conversation
//! layer surfaces one contradiction at a time.

mod detector;

pub use detector::{Contradiction, ContradictionDetector, ContradictionKind, ContradictionPolicy};
