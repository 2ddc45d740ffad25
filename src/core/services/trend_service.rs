//! Monthly sales trend with a trailing window and start-to-end growth.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::DEFAULT_TREND_WINDOW;
use crate::core::utils::percent_change;
use crate::domain::{SalesRecord, TrendPoint, TrendSeries};

/// Running totals for one `(year, month)` key; lives for a single call.
struct MonthBucket {
    representative_date: NaiveDate,
    sales: f64,
    revenue: f64,
    count: usize,
}

pub struct TrendService;

impl TrendService {
    /// Buckets records by month and keeps the latest twelve.
    pub fn bucket_by_month(records: &[SalesRecord]) -> TrendSeries {
        Self::bucket_by_month_window(records, DEFAULT_TREND_WINDOW)
    }

    /// Buckets records by month, keeping only the most recent `window` buckets
    /// in chronological order.
    ///
    /// `growth_percent` compares the first and last retained buckets and is
    /// `0.0` with fewer than two buckets or a non-positive first total.
    pub fn bucket_by_month_window(records: &[SalesRecord], window: usize) -> TrendSeries {
        // BTreeMap keyed by (year, month) iterates in calendar order, which is
        // the order of the buckets' representative dates.
        let mut buckets: BTreeMap<(i32, u32), MonthBucket> = BTreeMap::new();
        for record in records {
            let bucket = buckets
                .entry((record.year, record.month_number()))
                .or_insert_with(|| MonthBucket {
                    representative_date: record.date,
                    sales: 0.0,
                    revenue: 0.0,
                    count: 0,
                });
            bucket.sales += record.sales;
            bucket.revenue += record.revenue;
            bucket.count += 1;
        }

        let total_buckets = buckets.len();
        let points: Vec<TrendPoint> = buckets
            .into_iter()
            .skip(total_buckets.saturating_sub(window))
            .map(|((year, month), bucket)| TrendPoint {
                period_label: bucket.representative_date.format("%b %Y").to_string(),
                year,
                month,
                representative_date: bucket.representative_date,
                total_sales: bucket.sales,
                total_revenue: bucket.revenue,
                record_count: bucket.count,
            })
            .collect();

        let growth_percent = match (points.first(), points.last()) {
            (Some(first), Some(last)) if points.len() >= 2 => {
                percent_change(first.total_sales, last.total_sales)
            }
            _ => 0.0,
        };
        let total_sales: f64 = points.iter().map(|point| point.total_sales).sum();

        tracing::debug!(
            records = records.len(),
            buckets = total_buckets,
            retained = points.len(),
            "bucketed sales trend"
        );
        TrendSeries {
            points,
            growth_percent,
            total_sales,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Region, SalesFigures};

    fn sale(year: i32, month: u32, day: u32, sales: f64) -> SalesRecord {
        SalesRecord::new(
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            Category::Electronics,
            Region::West,
            SalesFigures {
                sales,
                revenue: sales * 2.0,
                ..SalesFigures::default()
            },
        )
    }

    #[test]
    fn members_of_a_month_are_summed() {
        let records = vec![sale(2024, 3, 5, 10.0), sale(2024, 3, 20, 15.0)];
        let series = TrendService::bucket_by_month(&records);
        assert_eq!(series.len(), 1);
        let point = &series.points[0];
        assert_eq!(point.total_sales, 25.0);
        assert_eq!(point.total_revenue, 50.0);
        assert_eq!(point.record_count, 2);
        assert_eq!(point.period_label, "Mar 2024");
        assert_eq!(series.growth_percent, 0.0);
    }

    #[test]
    fn same_month_in_different_years_stays_separate() {
        let records = vec![sale(2024, 1, 1, 30.0), sale(2023, 1, 1, 20.0)];
        let series = TrendService::bucket_by_month(&records);
        assert_eq!(series.len(), 2);
        assert_eq!(series.points[0].year, 2023);
        assert_eq!(series.growth_percent, 50.0);
        assert_eq!(series.total_sales, 50.0);
    }

    #[test]
    fn custom_window_trims_oldest_buckets() {
        let records: Vec<SalesRecord> = (1..=5).map(|m| sale(2024, m, 1, m as f64)).collect();
        let series = TrendService::bucket_by_month_window(&records, 2);
        let months: Vec<u32> = series.points.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![4, 5]);
        assert_eq!(series.growth_percent, 25.0);
        assert_eq!(series.total_sales, 9.0);
    }
}
