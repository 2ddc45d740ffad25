#![doc(test(attr(deny(warnings))))]

//! Sales Core filters, buckets, and summarizes periodic sales records and
//! classifies inventory stock levels for dashboard front ends.
//!
//! Every service is a pure, synchronous function over borrowed snapshots:
//! callers pass records, criteria, and selection state in and receive freshly
//! allocated result structures back.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::services::{
    BreakdownService, DashboardService, FilterService, InventoryService, MetricsService,
    RegionService, SkuSummaryService, TrendService,
};
pub use config::{AnalyticsConfig, ConfigManager};
pub use errors::{AnalyticsError, AnalyticsResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "Sales Core tracing initialized.");
    });
}

/// Compile-time provenance captured by the build script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        git_hash: env!("SALES_CORE_BUILD_HASH"),
        git_status: env!("SALES_CORE_BUILD_STATUS"),
        timestamp: env!("SALES_CORE_BUILD_TIMESTAMP"),
        target: env!("SALES_CORE_BUILD_TARGET"),
        profile: env!("SALES_CORE_BUILD_PROFILE"),
        rustc: env!("SALES_CORE_BUILD_RUSTC"),
    }
}
