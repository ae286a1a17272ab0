//! Candidate product as returned by the Catalog Provider.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{PriceInfo, ReviewSummary};
use crate::domain::foundation::ProductId;

/// Availability on one sales platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    InStock,
    Limited,
    OutOfStock,
}

impl StockLevel {
    /// Returns true when stock is running out.
    pub fn is_limited(&self) -> bool {
        matches!(self, StockLevel::Limited)
    }
}

/// One candidate product, enriched with price and review intelligence.
///
/// Read-only to the core; ownership stays with the Catalog Provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    /// Catalog category, e.g. "gaming laptops" or "smartwatches".
    pub category: String,
    pub price: PriceInfo,
    pub reviews: ReviewSummary,
    /// Per-platform availability.
    pub stock: BTreeMap<String, StockLevel>,
    /// Market-timing signal from the provider, 1 (wait) to 10 (buy now).
    pub urgency_score: u8,
}

impl Product {
    /// Returns true if any platform reports limited stock.
    pub fn has_limited_stock(&self) -> bool {
        self.stock.values().any(|s| s.is_limited())
    }
}
