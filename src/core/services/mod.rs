pub mod breakdown_service;
pub mod dashboard_service;
pub mod filter_service;
pub mod inventory_service;
pub mod metrics_service;
pub mod region_service;
pub mod sku_summary_service;
pub mod trend_service;

pub use breakdown_service::BreakdownService;
pub use dashboard_service::DashboardService;
pub use filter_service::FilterService;
pub use inventory_service::InventoryService;
pub use metrics_service::MetricsService;
pub use region_service::RegionService;
pub use sku_summary_service::SkuSummaryService;
pub use trend_service::TrendService;

#[cfg(test)]
mod tests;
