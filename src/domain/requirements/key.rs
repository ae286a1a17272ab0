//! Requirement field keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One field in the evolving user-intent map.
///
/// Known fields are a closed enumeration; anything else lands in the
/// `Extension` bucket so new extraction rules can ship without a schema
/// change.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum RequirementKey {
    Category,
    Budget,
    UseCase,
    BudgetFlexibility,
    ExpertiseLevel,
    PreferBrands,
    AvoidBrands,
    MustHaveFeatures,
    NiceToHaveFeatures,
    DontCareFeatures,
    Extension(String),
}

impl RequirementKey {
    /// Returns the wire name of this key.
    pub fn as_str(&self) -> &str {
        match self {
            RequirementKey::Category => "category",
            RequirementKey::Budget => "budget",
            RequirementKey::UseCase => "use_case",
            RequirementKey::BudgetFlexibility => "budget_flexibility",
            RequirementKey::ExpertiseLevel => "expertise_level",
            RequirementKey::PreferBrands => "prefer_brands",
            RequirementKey::AvoidBrands => "avoid_brands",
            RequirementKey::MustHaveFeatures => "must_have_features",
            RequirementKey::NiceToHaveFeatures => "nice_to_have_features",
            RequirementKey::DontCareFeatures => "dont_care_features",
            RequirementKey::Extension(name) => name,
        }
    }

    /// Returns true for the brand-preference keys that merge by
    /// list-append instead of overwrite.
    pub fn accumulates(&self) -> bool {
        matches!(
            self,
            RequirementKey::PreferBrands | RequirementKey::AvoidBrands
        )
    }
}

impl From<String> for RequirementKey {
    fn from(name: String) -> Self {
        match name.as_str() {
            "category" => RequirementKey::Category,
            "budget" => RequirementKey::Budget,
            "use_case" => RequirementKey::UseCase,
            "budget_flexibility" => RequirementKey::BudgetFlexibility,
            "expertise_level" => RequirementKey::ExpertiseLevel,
            "prefer_brands" => RequirementKey::PreferBrands,
            "avoid_brands" => RequirementKey::AvoidBrands,
            "must_have_features" => RequirementKey::MustHaveFeatures,
            "nice_to_have_features" => RequirementKey::NiceToHaveFeatures,
            "dont_care_features" => RequirementKey::DontCareFeatures,
            _ => RequirementKey::Extension(name),
        }
    }
}

impl From<RequirementKey> for String {
    fn from(key: RequirementKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for RequirementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_round_trip_through_strings() {
        for key in [
            RequirementKey::Category,
            RequirementKey::Budget,
            RequirementKey::UseCase,
            RequirementKey::BudgetFlexibility,
            RequirementKey::ExpertiseLevel,
            RequirementKey::PreferBrands,
            RequirementKey::AvoidBrands,
            RequirementKey::MustHaveFeatures,
            RequirementKey::NiceToHaveFeatures,
            RequirementKey::DontCareFeatures,
        ] {
            let name = String::from(key.clone());
            assert_eq!(RequirementKey::from(name), key);
        }
    }

    #[test]
    fn unknown_name_becomes_extension() {
        let key = RequirementKey::from("screen_size".to_string());
        assert_eq!(key, RequirementKey::Extension("screen_size".to_string()));
        assert_eq!(key.as_str(), "screen_size");
    }

    #[test]
    fn only_brand_keys_accumulate() {
        assert!(RequirementKey::PreferBrands.accumulates());
        assert!(RequirementKey::AvoidBrands.accumulates());
        assert!(!RequirementKey::Category.accumulates());
        assert!(!RequirementKey::MustHaveFeatures.accumulates());
    }

    #[test]
    fn key_serializes_as_wire_name() {
        let json = serde_json::to_string(&RequirementKey::UseCase).unwrap();
        assert_eq!(json, "\"use_case\"");
    }

    #[test]
    fn key_deserializes_from_wire_name() {
        let key: RequirementKey = serde_json::from_str("\"budget\"").unwrap();
        assert_eq!(key, RequirementKey::Budget);
    }
}
