pub mod common;
pub mod filter;
pub mod inventory;
pub mod record;
pub mod report;
pub mod selection;
pub mod sku;

pub use common::{Category, Identifiable, NamedEntity, Quarter, Region, UnknownKey};
pub use filter::{FilterCriteria, KeyFilter, TimePeriod, ALL_KEY};
pub use inventory::{AlertTier, InventoryItem, StockThresholds};
pub use record::{RawSalesRecord, SalesFigures, SalesRecord};
pub use report::{
    AlertReport, AlertSummary, BreakdownEntry, DashboardView, SummaryMetrics, TrendPoint,
    TrendSeries,
};
pub use selection::{InteractionEvent, SelectionField, SelectionState};
pub use sku::{DailySales, SkuSalesSummary};
