mod common;

use sales_core::domain::{Category, FilterCriteria, KeyFilter, Region, SelectionState};
use sales_core::{AnalyticsConfig, DashboardService, FilterService, RegionService};

#[test]
fn unfiltered_dashboard_covers_whole_log() {
    let records = common::sample_log();
    let view = DashboardService::evaluate(
        &records,
        &FilterCriteria::default(),
        &SelectionState::new(),
        &AnalyticsConfig::default(),
    );
    assert_eq!(view.records.len(), records.len());
    assert_eq!(view.trend.len(), 12);
    assert_eq!(view.trend.points[0].year, 2024);
    assert_eq!(view.metrics.total_units, 4 * 60);
    assert!((view.metrics.revenue_growth_percent - 50.0).abs() < 1e-9);
    assert_eq!(view.by_category.len(), Category::ALL.len());
    assert_eq!(view.by_category[0].key, Category::Books);
    let share_total: f64 = view.by_region.iter().map(|entry| entry.share_percent).sum();
    assert!((share_total - 100.0).abs() < 1e-9);
}

#[test]
fn map_click_drills_into_region_and_back_out() {
    let records = common::sample_log();
    let config = AnalyticsConfig::default();
    let criteria = FilterCriteria::parse("all", "all", "2024");

    let selection = SelectionState::new().apply(&RegionService::state_click("Gujarat"));
    assert_eq!(selection.selected_region, KeyFilter::Only(Region::West));
    let view = DashboardService::evaluate(&records, &criteria, &selection, &config);
    assert!(!view.records.is_empty());
    assert!(view.records.iter().all(|r| r.region == Region::West && r.year == 2024));
    assert_eq!(view.by_region.len(), 1);

    let cleared = selection.apply(&RegionService::state_click("Maharashtra"));
    assert!(cleared.is_empty());
}

#[test]
fn unmapped_state_click_selects_the_raw_name_and_empties_the_view() {
    let records = common::sample_log();
    let config = AnalyticsConfig::default();
    let criteria = FilterCriteria::default();

    let west = SelectionState::new().toggle_region(Region::West);
    assert!(!DashboardService::evaluate(&records, &criteria, &west, &config)
        .records
        .is_empty());

    let next = west.apply(&RegionService::state_click("Unknown State"));
    assert_eq!(
        next.selected_region,
        KeyFilter::Unrecognized("Unknown State".into())
    );
    let view = DashboardService::evaluate(&records, &criteria, &next, &config);
    assert!(view.records.is_empty());
    assert_eq!(view.metrics.total_sales, 0.0);

    let back = next.apply(&RegionService::state_click("Unknown State"));
    assert!(back.is_empty());
}

#[test]
fn quarter_view_uses_configured_year() {
    let records = common::sample_log();
    let criteria = FilterCriteria::parse("Electronics", "all", "Q4");
    let filtered = FilterService::apply(&records, &criteria, &SelectionState::new());
    assert_eq!(filtered.len(), 3);
    assert!(filtered.iter().all(|r| r.year == 2024));

    let config = AnalyticsConfig {
        quarter_year: 2023,
        ..AnalyticsConfig::default()
    };
    let view = DashboardService::evaluate(&records, &criteria, &SelectionState::new(), &config);
    assert!(view.records.iter().all(|r| r.year == 2023));
    assert_eq!(view.metrics.total_revenue, 0.0);
    assert_eq!(view.metrics.revenue_growth_percent, -100.0);
}

#[test]
fn evaluation_is_deterministic() {
    let records = common::sample_log();
    let criteria = FilterCriteria::parse("Clothing", "all", "all");
    let selection = SelectionState::new().toggle_region(Region::East);
    let config = AnalyticsConfig::default();
    let first = DashboardService::evaluate(&records, &criteria, &selection, &config);
    let second = DashboardService::evaluate(&records, &criteria, &selection, &config);
    assert_eq!(first, second);
}
