//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Conversation session identifier.
///
/// Opaque string supplied by the calling layer (typically one per browser
/// tab or user); the core never generates these itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new SessionId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("session_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog product identifier (assigned by the Catalog Provider).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new ProductId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("product_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_accepts_non_empty_string() {
        let id = SessionId::new("tab-42").unwrap();
        assert_eq!(id.as_str(), "tab-42");
    }

    #[test]
    fn session_id_rejects_empty_string() {
        let result = SessionId::new("");
        assert!(result.is_err());
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "session_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn session_id_displays_correctly() {
        let id = SessionId::new("session-7").unwrap();
        assert_eq!(format!("{}", id), "session-7");
    }

    #[test]
    fn session_id_serializes_transparently() {
        let id = SessionId::new("tab-42").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"tab-42\"");
    }

    #[test]
    fn product_id_accepts_non_empty_string() {
        let id = ProductId::new("laptop_1").unwrap();
        assert_eq!(id.as_str(), "laptop_1");
    }

    #[test]
    fn product_id_rejects_empty_string() {
        assert!(ProductId::new("").is_err());
    }
}
