//! CSV inventory snapshots.
//!
//! Expected header: `sku,item_name,category,quantity,price`. `category` and
//! `price` may be left empty; an optional `id` column is honoured when present.

use std::io::Read;

use serde::Deserialize;
use uuid::Uuid;

use crate::domain::InventoryItem;
use crate::errors::AnalyticsResult;

#[derive(Debug, Deserialize)]
struct InventoryRow {
    #[serde(default)]
    id: Option<Uuid>,
    sku: String,
    item_name: String,
    #[serde(default)]
    category: Option<String>,
    quantity: u32,
    #[serde(default)]
    price: Option<f64>,
}

impl From<InventoryRow> for InventoryItem {
    fn from(row: InventoryRow) -> Self {
        let mut item = InventoryItem::new(
            row.sku,
            row.item_name,
            row.category.unwrap_or_default(),
            row.quantity,
        );
        if let Some(id) = row.id {
            item.id = id;
        }
        item.price = row.price;
        item
    }
}

/// Loads inventory rows from a CSV reader. Rows that fail to decode (for
/// example a negative or missing quantity) are skipped with a warning; an
/// unreadable header is an error.
pub fn load_inventory_csv<R: Read>(reader: R) -> AnalyticsResult<Vec<InventoryItem>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader.headers()?;

    let mut items = Vec::new();
    for (line_num, result) in csv_reader.deserialize::<InventoryRow>().enumerate() {
        match result {
            Ok(row) => items.push(InventoryItem::from(row)),
            Err(err) => {
                tracing::warn!(line = line_num + 2, %err, "skipping inventory CSV row");
            }
        }
    }
    Ok(items)
}
