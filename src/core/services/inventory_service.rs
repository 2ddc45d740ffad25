//! Stock-level alerting over an inventory snapshot.

use crate::domain::{AlertReport, AlertTier, InventoryItem, StockThresholds};

pub struct InventoryService;

impl InventoryService {
    /// Partitions items into tiers using the default critical bound of 5.
    pub fn classify(items: &[InventoryItem], threshold: u32) -> AlertReport {
        Self::classify_with(items, StockThresholds::with_low(threshold))
    }

    pub fn classify_with(items: &[InventoryItem], thresholds: StockThresholds) -> AlertReport {
        let mut report = AlertReport::default();
        for item in items {
            let bucket = match AlertTier::for_quantity(item.quantity, thresholds) {
                AlertTier::OutOfStock => &mut report.out_of_stock,
                AlertTier::Critical => &mut report.critical,
                AlertTier::Low => &mut report.low,
                AlertTier::Healthy => &mut report.healthy,
            };
            bucket.push(item.clone());
        }

        let summary = &mut report.summary;
        summary.total_items = items.len();
        summary.out_of_stock = report.out_of_stock.len();
        summary.critical = report.critical.len();
        summary.low = report.low.len();
        summary.healthy = report.healthy.len();
        summary.alert_count = summary.out_of_stock + summary.critical + summary.low;
        summary.stock_value = items.iter().filter_map(InventoryItem::stock_value).sum();

        if summary.alert_count > 0 {
            tracing::info!(
                out_of_stock = summary.out_of_stock,
                critical = summary.critical,
                low = summary.low,
                "inventory alerts raised"
            );
        }
        report
    }

    /// Every non-healthy item, most urgent first. Equal quantities keep their
    /// input order. A `threshold` under the critical bound is raised to it,
    /// matching [`InventoryService::classify`].
    pub fn low_stock_items(items: &[InventoryItem], threshold: u32) -> Vec<InventoryItem> {
        Self::low_stock_items_with(items, StockThresholds::with_low(threshold))
    }

    pub fn low_stock_items_with(
        items: &[InventoryItem],
        thresholds: StockThresholds,
    ) -> Vec<InventoryItem> {
        let mut low: Vec<InventoryItem> = items
            .iter()
            .filter(|item| AlertTier::for_quantity(item.quantity, thresholds).is_alert())
            .cloned()
            .collect();
        low.sort_by_key(|item| item.quantity);
        low
    }

    pub fn tier_of(item: &InventoryItem, thresholds: StockThresholds) -> AlertTier {
        AlertTier::for_quantity(item.quantity, thresholds)
    }
}
