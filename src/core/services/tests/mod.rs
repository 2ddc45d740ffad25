
use chrono::NaiveDate;

use crate::domain::{Category, Region, SalesFigures, SalesRecord};

/// Builds a record on the first of the month with the given sales figure.
pub(super) fn monthly_record(
    year: i32,
    month: u32,
    category: Category,
    region: Region,
    sales: f64,
) -> SalesRecord {
    SalesRecord::new(
        NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
        category,
        region,
        SalesFigures {
            sales,
            revenue: sales * 1.25,
            units: 1,
            customers: 1,
            ..SalesFigures::default()
        },
    )
}

/// Twelve months of 2023 and 2024 across every category and region pair.
pub(super) fn two_year_log() -> Vec<SalesRecord> {
    let mut records = Vec::new();
    for year in [2023, 2024] {
        for month in 1..=12 {
            for (idx, category) in Category::ALL.into_iter().enumerate() {
                let region = Region::ALL[(idx + month as usize) % Region::ALL.len()];
                records.push(monthly_record(year, month, category, region, 10.0 * month as f64));
            }
        }
    }
    records
}
