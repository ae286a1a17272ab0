//! Catalog Provider Port - Interface to the product catalog.
//!
//! The provider returns candidates already enriched with price history and
//! review breakdowns; the core performs no lookups beyond this call.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::Product;
use crate::domain::foundation::Rupees;

/// Errors the catalog boundary can produce.
///
/// The turn pipeline degrades these to a no-results reply instead of
/// propagating them to the frontend.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Catalog backend unavailable: {0}")]
    Unavailable(String),

    #[error("Catalog lookup failed: {0}")]
    LookupFailed(String),
}

/// Port for fetching candidate products.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Returns candidates for a category, optionally capped by price.
    ///
    /// An unknown category or an over-restrictive ceiling yields an empty
    /// list, not an error.
    async fn get_candidates(
        &self,
        category: &str,
        budget_ceiling: Option<Rupees>,
    ) -> Result<Vec<Product>, CatalogError>;
}
