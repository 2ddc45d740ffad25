//! Per-SKU daily sales history, as kept for demand planning.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of unit sales for a SKU. Accepts the `ds`/`y` column names used
/// by forecasting exports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailySales {
    #[serde(alias = "ds")]
    pub date: NaiveDate,
    #[serde(alias = "y")]
    pub units: f64,
}

impl DailySales {
    pub fn new(date: NaiveDate, units: f64) -> Self {
        Self { date, units }
    }
}

/// Span and volume of one SKU's recorded history.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkuSalesSummary {
    pub sku: String,
    pub data_points: usize,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub total_sales: f64,
    /// Mean units per recorded day, rounded to two decimals.
    pub avg_daily_sales: f64,
}
