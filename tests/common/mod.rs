use chrono::NaiveDate;
use sales_core::domain::{Category, Region, SalesFigures, SalesRecord};

/// Deterministic sales log: one row per category for each month of 2023 and
/// 2024, regions rotating so every region appears every month.
pub fn sample_log() -> Vec<SalesRecord> {
    let mut records = Vec::new();
    for year in [2023, 2024] {
        let uplift = if year == 2024 { 1.5 } else { 1.0 };
        for month in 1..=12u32 {
            for (idx, category) in Category::ALL.into_iter().enumerate() {
                let region = Region::ALL[(idx + month as usize) % Region::ALL.len()];
                let base = 100.0 + (idx as f64) * 10.0 + month as f64;
                records.push(SalesRecord::new(
                    NaiveDate::from_ymd_opt(year, month, 10).unwrap(),
                    category,
                    region,
                    SalesFigures {
                        sales: base * uplift,
                        revenue: base * uplift * 2.0,
                        previous_year_sales: base,
                        previous_year_revenue: base * 2.0,
                        units: 4,
                        customers: 2,
                    },
                ));
            }
        }
    }
    records
}
