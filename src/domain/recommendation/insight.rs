//! Human-readable justification text for a recommendation.

use std::collections::BTreeMap;

use super::scorer::normalize_feature;
use crate::domain::catalog::{PriceTrend, Product};
use crate::domain::foundation::ImportanceWeight;
use crate::domain::requirements::RequirementProfile;

const MAX_REASONS: usize = 4;
const MAX_COMPARISONS: usize = 3;
const MAX_STANDOUTS: usize = 3;

/// Builds the ordered reasoning list for one candidate (at most four
/// entries, highest-signal first).
pub(crate) fn reasoning(
    product: &Product,
    requirements: &RequirementProfile,
    priorities: &BTreeMap<String, ImportanceWeight>,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if let Some(budget) = requirements.budget() {
        let price = product.price.current;
        if price.as_f64() <= budget.as_f64() * 0.9 {
            reasons.push(format!(
                "Excellent value - {} under your budget",
                budget.saturating_sub(price)
            ));
        } else if price <= budget {
            reasons.push(format!("Fits your {} budget perfectly", budget));
        }
    }

    if let Some(performance) = product.reviews.rating_for("performance") {
        if performance.value() >= 4.0 {
            reasons.push(format!(
                "Strong performance rating ({}) from users",
                performance
            ));
        }
    }

    if product.price.discount_percentage > 10.0 {
        reasons.push(format!(
            "Great deal - {:.0}% discount from original price",
            product.price.discount_percentage
        ));
    }

    for (feature, importance) in priorities {
        if importance.is_top_priority() {
            if let Some(rating) = product.reviews.rating_for(&normalize_feature(feature)) {
                if rating.value() >= 4.0 {
                    reasons.push(format!("Excels in your top priority: {}", feature));
                }
            }
        }
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

/// Reports every rating category below 4.0 as a trade-off caveat.
pub(crate) fn trade_offs(product: &Product) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();
    for (category, rating) in &product.reviews.category_ratings {
        if rating.value() < 3.5 {
            result.insert(
                category.clone(),
                format!("Below average {} ({})", humanize(category), rating),
            );
        } else if rating.value() < 4.0 {
            result.insert(
                category.clone(),
                format!("Average {} ({})", humanize(category), rating),
            );
        }
    }
    result
}

/// Deal callouts worth surfacing next to the price.
pub(crate) fn deal_highlights(product: &Product) -> Vec<String> {
    let mut highlights = Vec::new();
    if product.price.discount_percentage > 15.0 {
        highlights.push(format!(
            "Major discount: {:.0}% off",
            product.price.discount_percentage
        ));
    }
    if product.price.near_historic_low {
        highlights.push("Near historical low price".to_string());
    }
    highlights.extend(product.price.drop_alerts.iter().take(2).cloned());
    highlights
}

/// Signals that buying sooner rather than later is sensible.
pub(crate) fn urgency_factors(product: &Product) -> Vec<String> {
    let mut factors = Vec::new();
    if product.has_limited_stock() {
        factors.push("Limited stock across platforms".to_string());
    }
    if product.price.trend == PriceTrend::Increasing {
        factors.push("Price trend is increasing".to_string());
    }
    if product.urgency_score >= 7 {
        factors.push("Good time to buy based on market analysis".to_string());
    }
    factors
}

/// Comparative-advantage claims against the other candidates in the same
/// ranking batch (at most three).
pub(crate) fn better_than_alternatives(product: &Product, batch: &[&Product]) -> Vec<String> {
    let mut claims = Vec::new();
    for other in batch {
        if other.id == product.id {
            continue;
        }
        if product.price.current < other.price.current {
            claims.push(format!(
                "{} cheaper than {}",
                other.price.current.saturating_sub(product.price.current),
                other.name
            ));
        }
        if product.reviews.overall > other.reviews.overall {
            claims.push(format!(
                "Higher rated than {} ({:.1} vs {:.1})",
                other.name,
                product.reviews.overall.value(),
                other.reviews.overall.value()
            ));
        }
    }
    claims.truncate(MAX_COMPARISONS);
    claims
}

/// What a cheaper alternative would lack: this candidate's standout
/// rating categories (at most three).
pub(crate) fn what_you_might_miss(product: &Product) -> Vec<String> {
    product
        .reviews
        .category_ratings
        .iter()
        .filter(|(_, rating)| rating.value() >= STANDOUT_RATING)
        .take(MAX_STANDOUTS)
        .map(|(category, _)| format!("Excellent {}", humanize(category)))
        .collect()
}

/// Rating at which a category counts as a standout strength.
const STANDOUT_RATING: f64 = 4.3;

fn humanize(category: &str) -> String {
    category.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{PriceInfo, ReviewSummary, StockLevel};
    use crate::domain::foundation::{ProductId, Rupees, StarRating};
    use crate::domain::requirements::{RequirementDelta, RequirementKey};

    fn product(current: u64, original: u64) -> Product {
        let mut ratings = BTreeMap::new();
        ratings.insert("performance".to_string(), StarRating::new(4.5));
        ratings.insert("battery_life".to_string(), StarRating::new(3.8));
        ratings.insert("keyboard".to_string(), StarRating::new(3.2));
        ratings.insert("value_for_money".to_string(), StarRating::new(4.6));
        Product {
            id: ProductId::new("p1").unwrap(),
            name: "ASUS TUF Gaming F15".to_string(),
            brand: "ASUS".to_string(),
            category: "gaming laptops".to_string(),
            price: PriceInfo::try_new(Rupees::new(current), Rupees::new(original)).unwrap(),
            reviews: ReviewSummary::new(StarRating::new(4.3), 1250, ratings),
            stock: BTreeMap::new(),
            urgency_score: 4,
        }
    }

    fn requirements(budget: u64) -> RequirementProfile {
        let mut p = RequirementProfile::new();
        let mut d = RequirementDelta::new();
        d.set(RequirementKey::Budget, budget);
        p.apply(&d);
        p
    }

    mod reasoning_rules {
        use super::*;

        #[test]
        fn deep_headroom_mentions_amount_under_budget() {
            let reasons = reasoning(&product(50_000, 50_000), &requirements(60_000), &BTreeMap::new());
            assert!(reasons[0].contains("₹10,000 under your budget"));
        }

        #[test]
        fn tight_fit_mentions_budget_fit() {
            // 58000 is above 90% of 60000, so the headroom phrasing does
            // not apply.
            let reasons = reasoning(&product(58_000, 58_000), &requirements(60_000), &BTreeMap::new());
            assert!(reasons[0].contains("Fits your ₹60,000 budget"));
        }

        #[test]
        fn over_budget_gets_no_budget_reason() {
            let reasons = reasoning(&product(65_000, 65_000), &requirements(60_000), &BTreeMap::new());
            assert!(!reasons.iter().any(|r| r.contains("budget")));
        }

        #[test]
        fn strong_performance_called_out() {
            let reasons = reasoning(&product(50_000, 50_000), &requirements(60_000), &BTreeMap::new());
            assert!(reasons.iter().any(|r| r.contains("performance rating (4.5/5.0)")));
        }

        #[test]
        fn discount_over_ten_percent_called_out() {
            // 50000 from 61599 is a ~19% discount.
            let reasons = reasoning(&product(50_000, 61_599), &requirements(60_000), &BTreeMap::new());
            assert!(reasons.iter().any(|r| r.contains("% discount")));
        }

        #[test]
        fn top_priority_with_high_rating_called_out() {
            let mut priorities = BTreeMap::new();
            priorities.insert(
                "Value For Money".to_string(),
                ImportanceWeight::try_new(9).unwrap(),
            );
            let reasons = reasoning(&product(50_000, 50_000), &requirements(60_000), &priorities);
            assert!(reasons
                .iter()
                .any(|r| r.contains("top priority: Value For Money")));
        }

        #[test]
        fn low_priority_feature_is_not_called_out() {
            let mut priorities = BTreeMap::new();
            priorities.insert(
                "Value For Money".to_string(),
                ImportanceWeight::try_new(5).unwrap(),
            );
            let reasons = reasoning(&product(50_000, 50_000), &requirements(60_000), &priorities);
            assert!(!reasons.iter().any(|r| r.contains("top priority")));
        }

        #[test]
        fn at_most_four_reasons() {
            let mut priorities = BTreeMap::new();
            for feature in ["Performance", "Value For Money"] {
                priorities.insert(feature.to_string(), ImportanceWeight::try_new(10).unwrap());
            }
            let reasons = reasoning(&product(40_000, 61_599), &requirements(60_000), &priorities);
            assert!(reasons.len() <= 4);
        }
    }

    mod trade_off_rules {
        use super::*;

        #[test]
        fn below_average_and_average_categories_reported() {
            let offs = trade_offs(&product(50_000, 50_000));
            assert_eq!(
                offs.get("keyboard").map(String::as_str),
                Some("Below average keyboard (3.2/5.0)")
            );
            assert_eq!(
                offs.get("battery_life").map(String::as_str),
                Some("Average battery life (3.8/5.0)")
            );
        }

        #[test]
        fn strong_categories_are_not_trade_offs() {
            let offs = trade_offs(&product(50_000, 50_000));
            assert!(!offs.contains_key("performance"));
            assert!(!offs.contains_key("value_for_money"));
        }
    }

    mod deal_and_urgency {
        use super::*;

        #[test]
        fn major_discount_highlighted() {
            let highlights = deal_highlights(&product(50_000, 61_599));
            assert!(highlights[0].starts_with("Major discount"));
        }

        #[test]
        fn modest_discount_not_highlighted() {
            let highlights = deal_highlights(&product(55_999, 61_599));
            assert!(highlights.is_empty());
        }

        #[test]
        fn near_historic_low_and_alerts_included() {
            let mut p = product(50_000, 61_599);
            p.price = p
                .price
                .with_near_historic_low(true)
                .with_drop_alerts(vec![
                    "Price dropped ₹5,600 in the last month".to_string(),
                    "15% below the festive-season average".to_string(),
                    "third alert that is dropped".to_string(),
                ]);

            let highlights = deal_highlights(&p);
            assert!(highlights.contains(&"Near historical low price".to_string()));
            // Only the first two alerts survive.
            assert_eq!(highlights.len(), 4);
        }

        #[test]
        fn urgency_factors_cover_stock_trend_and_score() {
            let mut p = product(50_000, 50_000);
            p.stock.insert("Flipkart".to_string(), StockLevel::Limited);
            p.price = p.price.with_trend(PriceTrend::Increasing);
            p.urgency_score = 8;

            let factors = urgency_factors(&p);
            assert_eq!(factors.len(), 3);
            assert!(factors[0].contains("Limited stock"));
        }

        #[test]
        fn calm_product_has_no_urgency() {
            assert!(urgency_factors(&product(50_000, 50_000)).is_empty());
        }
    }

    mod comparisons {
        use super::*;

        #[test]
        fn cheaper_and_higher_rated_claims() {
            let winner = product(50_000, 50_000);
            let mut rival = product(55_000, 55_000);
            rival.id = ProductId::new("p2").unwrap();
            rival.name = "HP Pavilion Gaming 15".to_string();
            rival.reviews.overall = StarRating::new(4.1);

            let batch = [&winner, &rival];
            let claims = better_than_alternatives(&winner, &batch);
            assert!(claims[0].contains("₹5,000 cheaper than HP Pavilion Gaming 15"));
            assert!(claims[1].contains("(4.3 vs 4.1)"));
        }

        #[test]
        fn no_claims_against_itself() {
            let p = product(50_000, 50_000);
            assert!(better_than_alternatives(&p, &[&p]).is_empty());
        }

        #[test]
        fn standout_categories_listed_as_might_miss() {
            let missed = what_you_might_miss(&product(50_000, 50_000));
            assert_eq!(
                missed,
                vec!["Excellent performance", "Excellent value for money"]
            );
        }
    }
}
