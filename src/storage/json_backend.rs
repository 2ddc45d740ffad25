//! JSON import and export for sales logs and inventory snapshots.
//!
//! Record and inventory files hold a top-level array; SKU histories are an
//! object keyed by SKU whose values are arrays of daily sales. Rows are decoded one at a time so a single
//! bad entry is skipped instead of rejecting the whole file.

use std::{collections::BTreeMap, fs, path::Path};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{tmp_path, write_atomic};
use crate::domain::{DailySales, InventoryItem, RawSalesRecord, SalesRecord};
use crate::errors::AnalyticsResult;

use super::RecordStore;

pub fn load_records_from_str(data: &str) -> AnalyticsResult<RecordStore> {
    let rows: Vec<Value> = serde_json::from_str(data)?;
    Ok(RecordStore::ingest(rows.into_iter().map(|row| {
        serde_json::from_value::<RawSalesRecord>(row).map_err(Into::into)
    })))
}

pub fn load_records_from_path(path: &Path) -> AnalyticsResult<RecordStore> {
    let data = fs::read_to_string(path)?;
    load_records_from_str(&data)
}

pub fn records_to_json(records: &[SalesRecord]) -> AnalyticsResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn save_records_to_path(records: &[SalesRecord], path: &Path) -> AnalyticsResult<()> {
    let json = records_to_json(records)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn load_inventory_from_str(data: &str) -> AnalyticsResult<Vec<InventoryItem>> {
    let rows: Vec<Value> = serde_json::from_str(data)?;
    Ok(decode_rows(rows, "inventory item"))
}

pub fn load_inventory_from_path(path: &Path) -> AnalyticsResult<Vec<InventoryItem>> {
    let data = fs::read_to_string(path)?;
    load_inventory_from_str(&data)
}

pub fn load_sku_history_from_str(
    data: &str,
) -> AnalyticsResult<BTreeMap<String, Vec<DailySales>>> {
    let skus: BTreeMap<String, Vec<Value>> = serde_json::from_str(data)?;
    Ok(skus
        .into_iter()
        .map(|(sku, rows)| (sku, decode_rows(rows, "daily sales")))
        .collect())
}

pub fn load_sku_history_from_path(
    path: &Path,
) -> AnalyticsResult<BTreeMap<String, Vec<DailySales>>> {
    let data = fs::read_to_string(path)?;
    load_sku_history_from_str(&data)
}

fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>, kind: &'static str) -> Vec<T> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::warn!(index, %err, kind, "skipping undecodable row");
                None
            }
        })
        .collect()
}
