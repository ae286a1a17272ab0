//! Catalog module - Candidate product read model.
//!
//! These types describe what the Catalog Provider hands the core: products
//! already enriched with price history and review-rating breakdowns. The
//! core only reads them; it never looks anything up itself.

mod price;
mod product;
mod reviews;

pub use price::{PriceInfo, PriceTrend};
pub use product::{Product, StockLevel};
pub use reviews::ReviewSummary;
