//! Result structures handed to the rendering collaborators.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::*;
use crate::domain::inventory::InventoryItem;
use crate::domain::record::SalesRecord;

/// One month of the sales trend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub period_label: String,
    pub year: i32,
    pub month: u32,
    pub representative_date: NaiveDate,
    pub total_sales: f64,
    pub total_revenue: f64,
    pub record_count: usize,
}

/// Chronological trailing window of month buckets plus its growth.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
    pub points: Vec<TrendPoint>,
    pub growth_percent: f64,
    pub total_sales: f64,
}

impl TrendSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Headline totals for the current year with year-over-year revenue growth.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub total_revenue: f64,
    pub total_sales: f64,
    pub total_customers: u64,
    pub total_units: u64,
    pub previous_revenue: f64,
    pub revenue_growth_percent: f64,
}

/// Share of sales attributed to one key of a breakdown chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry<K> {
    pub key: K,
    pub total_sales: f64,
    pub total_revenue: f64,
    pub share_percent: f64,
}

/// Tier counts for an inventory snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummary {
    pub total_items: usize,
    pub out_of_stock: usize,
    pub critical: usize,
    pub low: usize,
    pub healthy: usize,
    /// Items in any alerting tier; healthy stock is never counted.
    pub alert_count: usize,
    pub stock_value: f64,
}

/// Inventory partitioned by tier, each list in input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertReport {
    pub out_of_stock: Vec<InventoryItem>,
    pub critical: Vec<InventoryItem>,
    pub low: Vec<InventoryItem>,
    pub healthy: Vec<InventoryItem>,
    pub summary: AlertSummary,
}

/// Everything the dashboard renders for one filter/selection combination.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub records: Vec<SalesRecord>,
    pub trend: TrendSeries,
    pub metrics: SummaryMetrics,
    pub by_category: Vec<BreakdownEntry<Category>>,
    pub by_region: Vec<BreakdownEntry<Region>>,
}
