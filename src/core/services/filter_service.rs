//! Reduces a record collection to the rows the dashboard should show.

use crate::config::AnalyticsConfig;
use crate::domain::{FilterCriteria, SalesRecord, SelectionState};

/// Applies dropdown criteria and the click selection as one conjunction.
pub struct FilterService;

impl FilterService {
    /// Filters with the default policy, which pins quarter filters to 2024.
    pub fn apply(
        records: &[SalesRecord],
        criteria: &FilterCriteria,
        selection: &SelectionState,
    ) -> Vec<SalesRecord> {
        Self::apply_with(records, criteria, selection, &AnalyticsConfig::default())
    }

    /// Filters using `config.quarter_year` for quarter criteria. Survivors keep
    /// their input order.
    pub fn apply_with(
        records: &[SalesRecord],
        criteria: &FilterCriteria,
        selection: &SelectionState,
        config: &AnalyticsConfig,
    ) -> Vec<SalesRecord> {
        let filtered: Vec<SalesRecord> = records
            .iter()
            .filter(|record| Self::matches(record, criteria, selection, config.quarter_year))
            .cloned()
            .collect();
        tracing::debug!(
            input = records.len(),
            output = filtered.len(),
            category = %criteria.category,
            region = %criteria.region,
            period = %criteria.time_period,
            "filtered sales records"
        );
        filtered
    }

    pub fn matches(
        record: &SalesRecord,
        criteria: &FilterCriteria,
        selection: &SelectionState,
        quarter_year: i32,
    ) -> bool {
        criteria.matches(record, quarter_year) && selection.matches(record)
    }
}
