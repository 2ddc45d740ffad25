use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::inventory::{
    StockThresholds, DEFAULT_CRITICAL_THRESHOLD, DEFAULT_LOW_STOCK_THRESHOLD,
};
use crate::errors::{AnalyticsError, AnalyticsResult};

pub const DEFAULT_CURRENT_YEAR: i32 = 2024;
pub const DEFAULT_PREVIOUS_YEAR: i32 = 2023;
pub const DEFAULT_TREND_WINDOW: usize = 12;
const TMP_SUFFIX: &str = "tmp";

/// Tunables for the analytics services.
///
/// The year fields pin the dataset's "current" and "previous" periods; they
/// are literals rather than clock-relative so a fixed snapshot reports the
/// same numbers on every run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsConfig {
    pub current_year: i32,
    pub previous_year: i32,
    /// Year that quarter filters (`Q1`..`Q4`) are pinned to.
    pub quarter_year: i32,
    pub trend_window: usize,
    pub low_stock_threshold: u32,
    pub critical_threshold: u32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            current_year: DEFAULT_CURRENT_YEAR,
            previous_year: DEFAULT_PREVIOUS_YEAR,
            quarter_year: DEFAULT_CURRENT_YEAR,
            trend_window: DEFAULT_TREND_WINDOW,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            critical_threshold: DEFAULT_CRITICAL_THRESHOLD,
        }
    }
}

impl AnalyticsConfig {
    pub fn from_json_str(data: &str) -> AnalyticsResult<Self> {
        let config: Self = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AnalyticsResult<()> {
        if self.trend_window == 0 {
            return Err(AnalyticsError::InvalidConfig(
                "trend window must hold at least one month".into(),
            ));
        }
        if self.previous_year >= self.current_year {
            return Err(AnalyticsError::InvalidConfig(format!(
                "previous year {} must precede current year {}",
                self.previous_year, self.current_year
            )));
        }
        Ok(())
    }

    pub fn stock_thresholds(&self) -> StockThresholds {
        StockThresholds::new(self.critical_threshold, self.low_stock_threshold)
    }
}

/// Loads and persists an [`AnalyticsConfig`] at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config, falling back to defaults when the file is absent.
    pub fn load(&self) -> AnalyticsResult<AnalyticsConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "config missing, using defaults");
            return Ok(AnalyticsConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        AnalyticsConfig::from_json_str(&data)
    }

    pub fn save(&self, config: &AnalyticsConfig) -> AnalyticsResult<()> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

pub(crate) fn write_atomic(path: &Path, data: &str) -> AnalyticsResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
