//! Utterance extraction rule tables.
//!
//! Turns one free-text message into a partial requirement map. Extraction
//! is keyword and pattern matching over the lower-cased utterance: every
//! rule table is ordered, and the first match per field wins within a
//! single call.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{RequirementDelta, RequirementKey, RequirementProfile};

/// Category phrase table, most specific phrase first.
///
/// Each entry is (phrase, category, implied use case). The first phrase
/// found as a substring decides the category, so "gaming laptop" must sit
/// above the bare "laptop".
const CATEGORY_RULES: &[(&str, &str, Option<&str>)] = &[
    ("gaming laptop", "gaming laptops", Some("gaming")),
    ("gaming laptops", "gaming laptops", Some("gaming")),
    ("business laptop", "laptops", Some("business")),
    ("work laptop", "laptops", Some("work")),
    ("ultrabook", "laptops", Some("ultraportable")),
    ("laptop", "laptops", None),
    ("gaming phone", "smartphones", Some("gaming")),
    ("camera phone", "smartphones", Some("photography")),
    // The headphone family sits above the bare "phone" entry because
    // "headphones" and "earphones" contain it as a substring.
    ("wireless headphones", "headphones", Some("music")),
    ("bluetooth headphones", "headphones", Some("music")),
    ("headphones", "headphones", Some("music")),
    ("earphones", "headphones", Some("music")),
    ("earbuds", "headphones", Some("music")),
    ("smartphone", "smartphones", None),
    ("phone", "smartphones", None),
    ("smartwatch", "smartwatches", Some("fitness")),
    ("smartwatches", "smartwatches", Some("fitness")),
    ("fitness watch", "smartwatches", Some("fitness")),
    ("smart watch", "smartwatches", Some("fitness")),
];

/// Ordered numeric budget patterns; the first that matches wins, so
/// phrasing like "under 60k" is not re-read as a bare number.
static BUDGET_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"under[^\d]*₹?\s*(\d+)(?:k|thousand|,000)?",
        r"below[^\d]*₹?\s*(\d+)(?:k|thousand|,000)?",
        r"₹\s*(\d+)(?:k|thousand|,000)?",
        r"budget[^\d]*₹?\s*(\d+)(?:k|thousand|,000)?",
        r"around[^\d]*₹?\s*(\d+)(?:k|thousand|,000)?",
        r"(\d+)(?:k|thousand|,000)?\s*budget",
        r"^(\d+)$",
        r"^(\d+)k$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("budget pattern compiles"))
    .collect()
});

/// Use-case keyword table, consulted only when the category rule did not
/// already imply a use case.
const USE_CASE_RULES: &[(&str, &str)] = &[
    ("gaming", "gaming"),
    ("games", "gaming"),
    ("work", "work"),
    ("business", "business"),
    ("office", "business"),
    ("study", "study"),
    ("student", "study"),
    ("photography", "photography"),
    ("photos", "photography"),
    ("video editing", "video editing"),
    ("editing", "video editing"),
    ("music", "music"),
    ("audio", "music"),
    ("fitness", "fitness"),
    ("exercise", "fitness"),
];

const BEGINNER_MARKERS: &[&str] = &[
    "new to",
    "first time",
    "don't know much",
    "beginner",
    "confused",
];

const EXPERT_MARKERS: &[&str] = &[
    "expert",
    "advanced",
    "professional",
    "experienced",
    "technical",
];

const KNOWN_BRANDS: &[&str] = &[
    "asus", "hp", "dell", "lenovo", "acer", "msi", "apple", "samsung", "xiaomi", "oneplus",
];

const PREFER_MARKERS: &[&str] = &["prefer", "like", "want", "love"];

const AVOID_MARKERS: &[&str] = &["don't like", "avoid", "hate", "bad experience"];

/// Feature-importance marker tables. Each marker captures the phrase that
/// follows it, up to sentence punctuation.
const IMPORTANCE_MARKERS: &[(&str, &[&str])] = &[
    ("must_have", &["essential", "must have", "required", "important"]),
    (
        "nice_to_have",
        &["would like", "prefer", "nice to have", "bonus", "if possible"],
    ),
    (
        "dont_care",
        &["don't care", "doesn't matter", "not important"],
    ),
];

static IMPORTANCE_PATTERNS: Lazy<Vec<(RequirementKey, Vec<Regex>)>> = Lazy::new(|| {
    IMPORTANCE_MARKERS
        .iter()
        .map(|(kind, markers)| {
            let key = match *kind {
                "must_have" => RequirementKey::MustHaveFeatures,
                "nice_to_have" => RequirementKey::NiceToHaveFeatures,
                _ => RequirementKey::DontCareFeatures,
            };
            let patterns = markers
                .iter()
                .map(|marker| {
                    Regex::new(&format!(r"{}[:\s]+([^.!?]*)", regex::escape(marker)))
                        .expect("importance pattern compiles")
                })
                .collect();
            (key, patterns)
        })
        .collect()
});

/// Extracts requirement fields from one utterance.
///
/// Pure with respect to its inputs. The existing profile is consulted only
/// to avoid re-deriving fields: a use case already known to the session is
/// not clobbered by a category's implied use case, while an explicit
/// use-case keyword still overwrites it on merge.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtteranceExtractor;

impl UtteranceExtractor {
    /// Creates a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Runs every rule table over the utterance and returns the delta.
    ///
    /// An utterance with no recognizable field yields an empty delta.
    pub fn extract(&self, utterance: &str, existing: &RequirementProfile) -> RequirementDelta {
        let lower = utterance.to_lowercase();
        let mut delta = RequirementDelta::new();

        self.extract_category(&lower, existing, &mut delta);
        self.extract_budget(&lower, &mut delta);
        self.extract_use_case(&lower, existing, &mut delta);
        self.extract_expertise(&lower, &mut delta);
        self.extract_brands(&lower, &mut delta);
        self.extract_feature_importance(&lower, &mut delta);

        delta
    }

    fn extract_category(
        &self,
        lower: &str,
        existing: &RequirementProfile,
        delta: &mut RequirementDelta,
    ) {
        for (phrase, category, implied_use_case) in CATEGORY_RULES {
            if lower.contains(phrase) {
                delta.set(RequirementKey::Category, *category);
                if let Some(use_case) = implied_use_case {
                    if existing.use_case().is_none() {
                        delta.set(RequirementKey::UseCase, *use_case);
                    }
                }
                break;
            }
        }
    }

    fn extract_budget(&self, lower: &str, delta: &mut RequirementDelta) {
        for pattern in BUDGET_PATTERNS.iter() {
            let Some(caps) = pattern.captures(lower) else {
                continue;
            };
            let Ok(mut amount) = caps[1].parse::<u64>() else {
                continue;
            };
            if lower.contains('k') || lower.contains("thousand") || amount < 1000 {
                amount = amount.saturating_mul(1000);
            }
            delta.set(RequirementKey::Budget, amount);

            if lower.contains("under") || lower.contains("below") {
                delta.set(RequirementKey::BudgetFlexibility, "strict");
            } else if lower.contains("around") || lower.contains("approximately") {
                delta.set(RequirementKey::BudgetFlexibility, "flexible");
            }
            break;
        }
    }

    fn extract_use_case(
        &self,
        lower: &str,
        existing: &RequirementProfile,
        delta: &mut RequirementDelta,
    ) {
        // A use case already derived (this turn or earlier) is not
        // re-derived from the generic keyword scan.
        if delta.contains(&RequirementKey::UseCase) || existing.use_case().is_some() {
            return;
        }
        for (keyword, use_case) in USE_CASE_RULES {
            if lower.contains(keyword) {
                delta.set(RequirementKey::UseCase, *use_case);
                break;
            }
        }
    }

    fn extract_expertise(&self, lower: &str, delta: &mut RequirementDelta) {
        if BEGINNER_MARKERS.iter().any(|m| lower.contains(m)) {
            delta.set(RequirementKey::ExpertiseLevel, "beginner");
        } else if EXPERT_MARKERS.iter().any(|m| lower.contains(m)) {
            delta.set(RequirementKey::ExpertiseLevel, "expert");
        }
    }

    fn extract_brands(&self, lower: &str, delta: &mut RequirementDelta) {
        let rules = [
            (RequirementKey::PreferBrands, PREFER_MARKERS),
            (RequirementKey::AvoidBrands, AVOID_MARKERS),
        ];
        for (key, markers) in rules {
            if markers.iter().any(|m| lower.contains(m)) {
                for brand in KNOWN_BRANDS {
                    if lower.contains(brand) {
                        delta.push_item(key.clone(), *brand);
                    }
                }
            }
        }
    }

    fn extract_feature_importance(&self, lower: &str, delta: &mut RequirementDelta) {
        for (key, patterns) in IMPORTANCE_PATTERNS.iter() {
            for pattern in patterns {
                if let Some(caps) = pattern.captures(lower) {
                    let feature = caps[1].trim();
                    if !feature.is_empty() {
                        delta.push_item(key.clone(), feature);
                    }
                }
            }
        }
    }
}
