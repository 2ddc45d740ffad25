//! Per-category and per-region sales shares for the breakdown charts.

use std::collections::HashMap;
use std::hash::Hash;

use crate::core::utils::share_percent;
use crate::domain::{BreakdownEntry, Category, Region, SalesRecord};

pub struct BreakdownService;

impl BreakdownService {
    pub fn by_category(records: &[SalesRecord]) -> Vec<BreakdownEntry<Category>> {
        breakdown(records, |record| record.category)
    }

    pub fn by_region(records: &[SalesRecord]) -> Vec<BreakdownEntry<Region>> {
        breakdown(records, |record| record.region)
    }
}

/// Groups by `key`, then orders by descending sales. Keys with equal sales
/// stay in first-seen order.
fn breakdown<K, F>(records: &[SalesRecord], key: F) -> Vec<BreakdownEntry<K>>
where
    K: Copy + Eq + Hash,
    F: Fn(&SalesRecord) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut entries: Vec<BreakdownEntry<K>> = Vec::new();
    for record in records {
        let k = key(record);
        let idx = *positions.entry(k).or_insert_with(|| {
            entries.push(BreakdownEntry {
                key: k,
                total_sales: 0.0,
                total_revenue: 0.0,
                share_percent: 0.0,
            });
            entries.len() - 1
        });
        entries[idx].total_sales += record.sales;
        entries[idx].total_revenue += record.revenue;
    }

    let grand_total: f64 = entries.iter().map(|entry| entry.total_sales).sum();
    for entry in &mut entries {
        entry.share_percent = share_percent(entry.total_sales, grand_total);
    }
    entries.sort_by(|a, b| b.total_sales.total_cmp(&a.total_sales));
    entries
}
