//! Inventory snapshot items and stock severity tiers.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

pub const DEFAULT_CRITICAL_THRESHOLD: u32 = 5;
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 20;

/// A stocked item as reported by the inventory collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub sku: String,
    pub item_name: String,
    #[serde(default)]
    pub category: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl InventoryItem {
    pub fn new(
        sku: impl Into<String>,
        item_name: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sku: sku.into(),
            item_name: item_name.into(),
            category: category.into(),
            quantity,
            price: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Quantity times unit price, or `None` when the item is unpriced.
    pub fn stock_value(&self) -> Option<f64> {
        self.price
            .filter(|price| price.is_finite())
            .map(|price| price * f64::from(self.quantity))
    }
}

impl Identifiable for InventoryItem {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for InventoryItem {
    fn name(&self) -> &str {
        &self.item_name
    }
}

/// Quantity cut-offs separating the alert tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockThresholds {
    critical: u32,
    low: u32,
}

impl StockThresholds {
    /// Builds thresholds, raising `low` to `critical` when it falls below it.
    pub fn new(critical: u32, low: u32) -> Self {
        Self {
            critical,
            low: low.max(critical),
        }
    }

    pub fn with_low(low: u32) -> Self {
        Self::new(DEFAULT_CRITICAL_THRESHOLD, low)
    }

    pub fn critical(&self) -> u32 {
        self.critical
    }

    pub fn low(&self) -> u32 {
        self.low
    }
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self::new(DEFAULT_CRITICAL_THRESHOLD, DEFAULT_LOW_STOCK_THRESHOLD)
    }
}

/// Mutually exclusive stock severity classes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AlertTier {
    OutOfStock,
    Critical,
    Low,
    Healthy,
}

impl AlertTier {
    pub fn for_quantity(quantity: u32, thresholds: StockThresholds) -> Self {
        if quantity == 0 {
            AlertTier::OutOfStock
        } else if quantity <= thresholds.critical() {
            AlertTier::Critical
        } else if quantity <= thresholds.low() {
            AlertTier::Low
        } else {
            AlertTier::Healthy
        }
    }

    pub fn is_alert(self) -> bool {
        self != AlertTier::Healthy
    }
}

impl fmt::Display for AlertTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AlertTier::OutOfStock => "Out of stock",
            AlertTier::Critical => "Critical",
            AlertTier::Low => "Low",
            AlertTier::Healthy => "Healthy",
        };
        f.write_str(label)
    }
}
