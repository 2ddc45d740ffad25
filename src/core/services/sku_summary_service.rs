//! History summaries for SKUs with recorded daily sales.

use std::collections::BTreeMap;

use crate::core::utils::round_cents;
use crate::domain::{DailySales, SkuSalesSummary};

pub struct SkuSummaryService;

impl SkuSummaryService {
    /// Summarizes one SKU's history. Days with a non-finite unit count are
    /// left out of every figure.
    pub fn summarize(sku: &str, history: &[DailySales]) -> SkuSalesSummary {
        let mut summary = SkuSalesSummary {
            sku: sku.to_string(),
            ..SkuSalesSummary::default()
        };
        for day in history.iter().filter(|day| day.units.is_finite()) {
            summary.data_points += 1;
            summary.total_sales += day.units;
            summary.start_date = Some(summary.start_date.map_or(day.date, |d| d.min(day.date)));
            summary.end_date = Some(summary.end_date.map_or(day.date, |d| d.max(day.date)));
        }

        let dropped = history.len() - summary.data_points;
        if dropped > 0 {
            tracing::debug!(sku, dropped, "ignoring non-finite daily sales");
        }
        if summary.data_points > 0 {
            summary.avg_daily_sales = round_cents(summary.total_sales / summary.data_points as f64);
        }
        summary
    }

    /// One summary per SKU, ordered by SKU.
    pub fn summarize_all(histories: &BTreeMap<String, Vec<DailySales>>) -> Vec<SkuSalesSummary> {
        histories
            .iter()
            .map(|(sku, history)| Self::summarize(sku, history))
            .collect()
    }
}
