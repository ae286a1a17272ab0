//! Requirement maps: per-turn deltas and the accumulated profile.

use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap};

use super::{RequirementKey, RequirementValue};
use crate::domain::foundation::Rupees;

/// Fields newly detected in a single utterance.
///
/// Produced by the extractor, consumed by [`RequirementProfile::apply`].
/// An empty delta is a normal outcome (extraction miss), not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementDelta(BTreeMap<RequirementKey, RequirementValue>);

impl RequirementDelta {
    /// Creates an empty delta.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any earlier value from the same utterance.
    pub fn set(&mut self, key: RequirementKey, value: impl Into<RequirementValue>) {
        self.0.insert(key, value.into());
    }

    /// Appends one item to a list field, creating the list if absent.
    pub fn push_item(&mut self, key: RequirementKey, item: impl Into<String>) {
        let entry = self
            .0
            .entry(key)
            .or_insert_with(|| RequirementValue::List(Vec::new()));
        match entry {
            RequirementValue::List(items) => items.push(item.into()),
            other => *other = RequirementValue::List(vec![item.into()]),
        }
    }

    /// Looks up a field.
    pub fn get(&self, key: &RequirementKey) -> Option<&RequirementValue> {
        self.0.get(key)
    }

    /// Returns true if the field is present.
    pub fn contains(&self, key: &RequirementKey) -> bool {
        self.0.contains_key(key)
    }

    /// Returns true if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of extracted fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over extracted fields.
    pub fn iter(&self) -> btree_map::Iter<'_, RequirementKey, RequirementValue> {
        self.0.iter()
    }
}

/// The accumulated requirement state of one conversation.
///
/// Always equal to the right-biased fold of every delta applied so far,
/// except the brand-preference keys which accumulate by list-append.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementProfile(BTreeMap<RequirementKey, RequirementValue>);

impl RequirementProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one utterance's delta into the profile.
    ///
    /// Later values overwrite earlier ones, except `PreferBrands` and
    /// `AvoidBrands`, whose lists append in arrival order.
    pub fn apply(&mut self, delta: &RequirementDelta) {
        for (key, value) in delta.iter() {
            if key.accumulates() {
                if let (Some(existing), Some(incoming)) = (
                    self.0
                        .get_mut(key)
                        .and_then(|v| match v {
                            RequirementValue::List(items) => Some(items),
                            _ => None,
                        }),
                    value.as_list(),
                ) {
                    existing.extend(incoming.iter().cloned());
                    continue;
                }
            }
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Looks up a field.
    pub fn get(&self, key: &RequirementKey) -> Option<&RequirementValue> {
        self.0.get(key)
    }

    /// Returns true if the field is present.
    pub fn contains(&self, key: &RequirementKey) -> bool {
        self.0.contains_key(key)
    }

    /// Returns true if no requirements have been gathered yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of gathered fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over gathered fields.
    pub fn iter(&self) -> btree_map::Iter<'_, RequirementKey, RequirementValue> {
        self.0.iter()
    }

    /// The product category, if stated.
    pub fn category(&self) -> Option<&str> {
        self.get(&RequirementKey::Category).and_then(|v| v.as_text())
    }

    /// The budget ceiling, if stated.
    pub fn budget(&self) -> Option<Rupees> {
        self.get(&RequirementKey::Budget)
            .and_then(|v| v.as_number())
            .map(Rupees::new)
    }

    /// The intended use case, if known.
    pub fn use_case(&self) -> Option<&str> {
        self.get(&RequirementKey::UseCase).and_then(|v| v.as_text())
    }

    /// How firm the budget is ("strict" or "flexible"), if inferred.
    pub fn budget_flexibility(&self) -> Option<&str> {
        self.get(&RequirementKey::BudgetFlexibility)
            .and_then(|v| v.as_text())
    }

    /// The user's self-reported expertise level, if inferred.
    pub fn expertise_level(&self) -> Option<&str> {
        self.get(&RequirementKey::ExpertiseLevel)
            .and_then(|v| v.as_text())
    }

    /// Brands the user prefers, in arrival order.
    pub fn prefer_brands(&self) -> &[String] {
        self.list(&RequirementKey::PreferBrands)
    }

    /// Brands the user wants to avoid, in arrival order.
    pub fn avoid_brands(&self) -> &[String] {
        self.list(&RequirementKey::AvoidBrands)
    }

    /// Features the user declared must-haves.
    pub fn must_have_features(&self) -> &[String] {
        self.list(&RequirementKey::MustHaveFeatures)
    }

    fn list(&self, key: &RequirementKey) -> &[String] {
        self.get(key).and_then(|v| v.as_list()).unwrap_or(&[])
    }
}
