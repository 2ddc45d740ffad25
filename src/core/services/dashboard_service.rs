//! One-call evaluation of everything the sales dashboard renders.

use crate::config::AnalyticsConfig;
use crate::domain::{DashboardView, FilterCriteria, SalesRecord, SelectionState};

use super::{BreakdownService, FilterService, MetricsService, TrendService};

pub struct DashboardService;

impl DashboardService {
    /// Filters once, then derives the trend, summary cards, and breakdowns
    /// from the same filtered rows.
    pub fn evaluate(
        records: &[SalesRecord],
        criteria: &FilterCriteria,
        selection: &SelectionState,
        config: &AnalyticsConfig,
    ) -> DashboardView {
        let filtered = FilterService::apply_with(records, criteria, selection, config);
        let trend = TrendService::bucket_by_month_window(&filtered, config.trend_window);
        let metrics =
            MetricsService::summarize_years(&filtered, config.current_year, config.previous_year);
        let by_category = BreakdownService::by_category(&filtered);
        let by_region = BreakdownService::by_region(&filtered);
        DashboardView {
            records: filtered,
            trend,
            metrics,
            by_category,
            by_region,
        }
    }
}
