//! Pricing data attached to a candidate product.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Rupees, ValidationError};

/// Direction the price has been moving recently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PriceTrend {
    Increasing,
    Decreasing,
    #[default]
    Stable,
}

/// Price snapshot with deal signals, as enriched by the Catalog Provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceInfo {
    /// Current selling price.
    pub current: Rupees,
    /// Original (list) price before any discount.
    pub original: Rupees,
    /// Discount from original price, in percent.
    pub discount_percentage: f64,
    /// Recent price movement direction.
    pub trend: PriceTrend,
    /// True when the current price sits near the historical low.
    pub near_historic_low: bool,
    /// Provider-authored price drop callouts.
    pub drop_alerts: Vec<String>,
}

impl PriceInfo {
    /// Creates price info, deriving the discount percentage.
    ///
    /// `discount = (original - current) / original * 100` when original is
    /// positive, else 0. Rejects a current price above the original.
    pub fn try_new(current: Rupees, original: Rupees) -> Result<Self, ValidationError> {
        if current > original {
            return Err(ValidationError::invalid_format(
                "price",
                format!("current {} exceeds original {}", current, original),
            ));
        }
        let discount_percentage = if original.value() > 0 {
            (original.as_f64() - current.as_f64()) / original.as_f64() * 100.0
        } else {
            0.0
        };
        Ok(Self {
            current,
            original,
            discount_percentage,
            trend: PriceTrend::Stable,
            near_historic_low: false,
            drop_alerts: Vec::new(),
        })
    }

    /// Sets the price trend.
    pub fn with_trend(mut self, trend: PriceTrend) -> Self {
        self.trend = trend;
        self
    }

    /// Flags the price as near its historical low.
    pub fn with_near_historic_low(mut self, near: bool) -> Self {
        self.near_historic_low = near;
        self
    }

    /// Attaches provider price drop callouts.
    pub fn with_drop_alerts(mut self, alerts: Vec<String>) -> Self {
        self.drop_alerts = alerts;
        self
    }

    /// Amount saved versus the original price.
    pub fn savings(&self) -> Rupees {
        self.original.saturating_sub(self.current)
    }
}
