//! Sales fact rows and their loosely-typed ingestion form.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;
use crate::errors::AnalyticsError;

/// Numeric measures attached to a single sales observation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalesFigures {
    pub sales: f64,
    pub revenue: f64,
    pub previous_year_sales: f64,
    pub previous_year_revenue: f64,
    pub units: u64,
    pub customers: u64,
}

/// One periodic sales observation for a category and region.
///
/// `month`, `quarter`, and `year` are always derived from `date`; deserializing
/// goes through [`RawSalesRecord`] so stored labels can never drift from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "RawSalesRecord")]
pub struct SalesRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub month: String,
    pub quarter: Quarter,
    pub year: i32,
    pub category: Category,
    pub region: Region,
    pub sales: f64,
    pub revenue: f64,
    pub previous_year_sales: f64,
    pub previous_year_revenue: f64,
    pub units: u64,
    pub customers: u64,
}

impl SalesRecord {
    pub fn new(date: NaiveDate, category: Category, region: Region, figures: SalesFigures) -> Self {
        Self::with_id(Uuid::new_v4(), date, category, region, figures)
    }

    pub fn with_id(
        id: Uuid,
        date: NaiveDate,
        category: Category,
        region: Region,
        figures: SalesFigures,
    ) -> Self {
        Self {
            id,
            date,
            month: month_label(date),
            quarter: Quarter::from_month(date.month()),
            year: date.year(),
            category,
            region,
            sales: figures.sales,
            revenue: figures.revenue,
            previous_year_sales: figures.previous_year_sales,
            previous_year_revenue: figures.previous_year_revenue,
            units: figures.units,
            customers: figures.customers,
        }
    }

    /// Calendar month number, 1 through 12.
    pub fn month_number(&self) -> u32 {
        self.date.month()
    }
}

impl Identifiable for SalesRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Short month name used as the record's `month` label, e.g. `Mar`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

/// Sales row as it arrives from an external source, every field optional.
///
/// Derived labels (`month`, `quarter`, `year`) are accepted but ignored on
/// conversion; they are recomputed from `date`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawSalesRecord {
    pub id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub month: Option<String>,
    pub quarter: Option<String>,
    pub year: Option<i32>,
    pub category: Option<String>,
    pub region: Option<String>,
    pub sales: Option<f64>,
    pub revenue: Option<f64>,
    pub previous_year_sales: Option<f64>,
    pub previous_year_revenue: Option<f64>,
    pub units: Option<u64>,
    pub customers: Option<u64>,
}

impl TryFrom<RawSalesRecord> for SalesRecord {
    type Error = AnalyticsError;

    fn try_from(raw: RawSalesRecord) -> Result<Self, Self::Error> {
        let date = raw.date.ok_or(malformed("date"))?;
        let category = raw
            .category
            .as_deref()
            .and_then(|label| label.parse::<Category>().ok())
            .ok_or(malformed("category"))?;
        let region = raw
            .region
            .as_deref()
            .and_then(|label| label.parse::<Region>().ok())
            .ok_or(malformed("region"))?;
        let figures = SalesFigures {
            sales: amount(raw.sales, "sales")?,
            revenue: amount(raw.revenue, "revenue")?,
            previous_year_sales: amount(raw.previous_year_sales, "previousYearSales")?,
            previous_year_revenue: amount(raw.previous_year_revenue, "previousYearRevenue")?,
            units: raw.units.ok_or(malformed("units"))?,
            customers: raw.customers.ok_or(malformed("customers"))?,
        };
        let id = raw.id.unwrap_or_else(Uuid::new_v4);
        Ok(SalesRecord::with_id(id, date, category, region, figures))
    }
}

fn amount(value: Option<f64>, field: &'static str) -> Result<f64, AnalyticsError> {
    value
        .filter(|amount| amount.is_finite())
        .ok_or(malformed(field))
}

fn malformed(field: &'static str) -> AnalyticsError {
    AnalyticsError::MalformedRecord { field }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_row() -> RawSalesRecord {
        RawSalesRecord {
            date: NaiveDate::from_ymd_opt(2024, 8, 14),
            category: Some("Books".into()),
            region: Some("East India".into()),
            sales: Some(120.0),
            revenue: Some(150.0),
            previous_year_sales: Some(90.0),
            previous_year_revenue: Some(110.0),
            units: Some(12),
            customers: Some(7),
            ..RawSalesRecord::default()
        }
    }

    #[test]
    fn derived_labels_follow_the_date() {
        let record = SalesRecord::try_from(raw_row()).expect("valid row");
        assert_eq!(record.month, "Aug");
        assert_eq!(record.quarter, Quarter::Q3);
        assert_eq!(record.year, 2024);
        assert_eq!(record.month_number(), 8);
    }

    #[test]
    fn stale_labels_are_recomputed() {
        let mut raw = raw_row();
        raw.month = Some("Jan".into());
        raw.quarter = Some("Q1".into());
        raw.year = Some(1999);
        let record = SalesRecord::try_from(raw).expect("valid row");
        assert_eq!(record.month, "Aug");
        assert_eq!(record.quarter, Quarter::Q3);
        assert_eq!(record.year, 2024);
    }

    #[test]
    fn missing_numeric_field_is_malformed() {
        let mut raw = raw_row();
        raw.revenue = None;
        let err = SalesRecord::try_from(raw).unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::MalformedRecord { field: "revenue" }
        ));
    }

    #[test]
    fn non_finite_amount_is_malformed() {
        let mut raw = raw_row();
        raw.sales = Some(f64::NAN);
        assert!(SalesRecord::try_from(raw).is_err());
    }

    #[test]
    fn unknown_category_is_malformed() {
        let mut raw = raw_row();
        raw.category = Some("Groceries".into());
        let err = SalesRecord::try_from(raw).unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn json_roundtrip_keeps_derived_labels() {
        let record = SalesRecord::try_from(raw_row()).expect("valid row");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["month"], "Aug");
        assert_eq!(json["quarter"], "Q3");
        assert_eq!(json["previousYearRevenue"], 110.0);
        let back: SalesRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
