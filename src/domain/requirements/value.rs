//! Requirement field values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tagged value of a requirement field.
///
/// Budgets are numbers, categories and levels are text, brand and feature
/// preferences are ordered string lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequirementValue {
    Number(u64),
    Text(String),
    List(Vec<String>),
}

impl RequirementValue {
    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<u64> {
        match self {
            RequirementValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RequirementValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list items, if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            RequirementValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<u64> for RequirementValue {
    fn from(n: u64) -> Self {
        RequirementValue::Number(n)
    }
}

impl From<&str> for RequirementValue {
    fn from(s: &str) -> Self {
        RequirementValue::Text(s.to_string())
    }
}

impl From<String> for RequirementValue {
    fn from(s: String) -> Self {
        RequirementValue::Text(s)
    }
}

impl From<Vec<String>> for RequirementValue {
    fn from(items: Vec<String>) -> Self {
        RequirementValue::List(items)
    }
}

impl fmt::Display for RequirementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequirementValue::Number(n) => write!(f, "{}", n),
            RequirementValue::Text(s) => write!(f, "{}", s),
            RequirementValue::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}
