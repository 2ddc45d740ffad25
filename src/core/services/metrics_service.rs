//! Summary-card totals with year-over-year revenue growth.

use crate::config::{DEFAULT_CURRENT_YEAR, DEFAULT_PREVIOUS_YEAR};
use crate::core::utils::percent_change;
use crate::domain::{SalesRecord, SummaryMetrics};

pub struct MetricsService;

impl MetricsService {
    /// Summarizes 2024 against 2023.
    pub fn summarize(records: &[SalesRecord]) -> SummaryMetrics {
        Self::summarize_years(records, DEFAULT_CURRENT_YEAR, DEFAULT_PREVIOUS_YEAR)
    }

    /// Totals cover `current_year` only; records from other years are ignored
    /// except `previous_year` revenue, which feeds the growth ratio.
    pub fn summarize_years(
        records: &[SalesRecord],
        current_year: i32,
        previous_year: i32,
    ) -> SummaryMetrics {
        let mut metrics = SummaryMetrics::default();
        for record in records {
            if record.year == current_year {
                metrics.total_revenue += record.revenue;
                metrics.total_sales += record.sales;
                metrics.total_customers += record.customers;
                metrics.total_units += record.units;
            } else if record.year == previous_year {
                metrics.previous_revenue += record.revenue;
            }
        }
        metrics.revenue_growth_percent =
            percent_change(metrics.previous_revenue, metrics.total_revenue);
        metrics
    }
}
