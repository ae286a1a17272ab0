//! Static Catalog Adapter
//!
//! A hand-authored product set covering gaming laptops and smartwatches.
//! Deterministic (no per-call price jitter), which keeps ranking tests
//! stable. Categories it does not carry simply return no candidates.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::domain::catalog::{PriceInfo, PriceTrend, Product, ReviewSummary, StockLevel};
use crate::domain::foundation::{ProductId, Rupees, StarRating};
use crate::ports::{CatalogError, CatalogProvider};

/// In-process catalog with a fixed product set.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Creates the catalog with its built-in product set.
    pub fn new() -> Self {
        Self {
            products: seed_products(),
        }
    }

    /// All products, unfiltered.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn get_candidates(
        &self,
        category: &str,
        budget_ceiling: Option<Rupees>,
    ) -> Result<Vec<Product>, CatalogError> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.category == category)
            .filter(|p| budget_ceiling.map_or(true, |ceiling| p.price.current <= ceiling))
            .cloned()
            .collect())
    }
}

struct Seed {
    id: &'static str,
    name: &'static str,
    brand: &'static str,
    category: &'static str,
    current: u64,
    original: u64,
    trend: PriceTrend,
    near_historic_low: bool,
    drop_alerts: &'static [&'static str],
    overall: f64,
    total_reviews: u32,
    category_ratings: &'static [(&'static str, f64)],
    stock: &'static [(&'static str, StockLevel)],
    urgency_score: u8,
}

fn seed_products() -> Vec<Product> {
    SEEDS.iter().map(build).collect()
}

fn build(seed: &Seed) -> Product {
    let price = PriceInfo::try_new(Rupees::new(seed.current), Rupees::new(seed.original))
        .expect("seed prices are consistent")
        .with_trend(seed.trend)
        .with_near_historic_low(seed.near_historic_low)
        .with_drop_alerts(seed.drop_alerts.iter().map(|a| a.to_string()).collect());

    let category_ratings: BTreeMap<String, StarRating> = seed
        .category_ratings
        .iter()
        .map(|(name, rating)| (name.to_string(), StarRating::new(*rating)))
        .collect();

    Product {
        id: ProductId::new(seed.id).expect("seed ids are non-empty"),
        name: seed.name.to_string(),
        brand: seed.brand.to_string(),
        category: seed.category.to_string(),
        price,
        reviews: ReviewSummary::new(
            StarRating::new(seed.overall),
            seed.total_reviews,
            category_ratings,
        ),
        stock: seed
            .stock
            .iter()
            .map(|(platform, level)| (platform.to_string(), *level))
            .collect(),
        urgency_score: seed.urgency_score,
    }
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "laptop_1",
        name: "ASUS TUF Gaming F15",
        brand: "ASUS",
        category: "gaming laptops",
        current: 55_999,
        original: 61_599,
        trend: PriceTrend::Stable,
        near_historic_low: true,
        drop_alerts: &["Price dropped ₹5,600 in the last month"],
        overall: 4.3,
        total_reviews: 1250,
        category_ratings: &[
            ("performance", 4.5),
            ("build_quality", 4.2),
            ("battery_life", 3.8),
            ("display", 4.4),
            ("keyboard", 4.1),
            ("value_for_money", 4.6),
        ],
        stock: &[
            ("Amazon", StockLevel::InStock),
            ("Flipkart", StockLevel::InStock),
            ("Croma", StockLevel::InStock),
        ],
        urgency_score: 7,
    },
    Seed {
        id: "laptop_2",
        name: "HP Pavilion Gaming 15",
        brand: "HP",
        category: "gaming laptops",
        current: 52_999,
        original: 58_299,
        trend: PriceTrend::Stable,
        near_historic_low: false,
        drop_alerts: &[],
        overall: 4.1,
        total_reviews: 890,
        category_ratings: &[
            ("performance", 4.3),
            ("build_quality", 4.0),
            ("battery_life", 4.2),
            ("display", 4.1),
            ("keyboard", 3.9),
            ("value_for_money", 4.4),
        ],
        stock: &[
            ("Amazon", StockLevel::InStock),
            ("Flipkart", StockLevel::Limited),
            ("Croma", StockLevel::InStock),
        ],
        urgency_score: 4,
    },
    Seed {
        id: "laptop_3",
        name: "Lenovo IdeaPad Gaming 3",
        brand: "Lenovo",
        category: "gaming laptops",
        current: 58_999,
        original: 64_899,
        trend: PriceTrend::Decreasing,
        near_historic_low: true,
        drop_alerts: &["Price dropped ₹5,900 in the last month"],
        overall: 4.2,
        total_reviews: 756,
        category_ratings: &[
            ("performance", 4.6),
            ("build_quality", 4.1),
            ("battery_life", 3.7),
            ("display", 4.3),
            ("keyboard", 4.4),
            ("value_for_money", 4.5),
        ],
        stock: &[
            ("Amazon", StockLevel::InStock),
            ("Flipkart", StockLevel::InStock),
            ("Croma", StockLevel::OutOfStock),
        ],
        urgency_score: 7,
    },
    Seed {
        id: "smartwatch_1",
        name: "Amazfit GTS 2 Mini",
        brand: "Amazfit",
        category: "smartwatches",
        current: 4_999,
        original: 5_499,
        trend: PriceTrend::Stable,
        near_historic_low: true,
        drop_alerts: &[],
        overall: 4.2,
        total_reviews: 890,
        category_ratings: &[
            ("battery_life", 4.6),
            ("build_quality", 4.1),
            ("display", 4.3),
            ("fitness_tracking", 4.4),
            ("connectivity", 4.0),
            ("value_for_money", 4.5),
        ],
        stock: &[
            ("Amazon", StockLevel::InStock),
            ("Flipkart", StockLevel::InStock),
        ],
        urgency_score: 7,
    },
    Seed {
        id: "smartwatch_2",
        name: "Realme Watch S Pro",
        brand: "Realme",
        category: "smartwatches",
        current: 5_999,
        original: 6_599,
        trend: PriceTrend::Stable,
        near_historic_low: false,
        drop_alerts: &[],
        overall: 4.0,
        total_reviews: 650,
        category_ratings: &[
            ("battery_life", 4.2),
            ("build_quality", 3.9),
            ("display", 4.1),
            ("fitness_tracking", 4.3),
            ("connectivity", 3.8),
            ("value_for_money", 4.2),
        ],
        stock: &[
            ("Amazon", StockLevel::InStock),
            ("Flipkart", StockLevel::InStock),
        ],
        urgency_score: 4,
    },
    Seed {
        id: "smartwatch_3",
        name: "Fire-Boltt Phoenix Pro",
        brand: "Fire-Boltt",
        category: "smartwatches",
        current: 3_999,
        original: 4_399,
        trend: PriceTrend::Increasing,
        near_historic_low: false,
        drop_alerts: &[],
        overall: 3.8,
        total_reviews: 420,
        category_ratings: &[
            ("battery_life", 3.5),
            ("build_quality", 3.6),
            ("display", 4.0),
            ("fitness_tracking", 4.1),
            ("connectivity", 4.2),
            ("value_for_money", 4.3),
        ],
        stock: &[
            ("Amazon", StockLevel::Limited),
            ("Flipkart", StockLevel::InStock),
        ],
        urgency_score: 4,
    },
];
