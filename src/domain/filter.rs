//! Declarative filter criteria chosen in the dashboard controls.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::common::*;
use crate::domain::record::SalesRecord;

/// Wildcard label the controls use for "no restriction".
pub const ALL_KEY: &str = "all";

/// Restricts a record attribute to one key, or lets everything through.
///
/// Labels outside the known key set are kept as `Unrecognized` and match no
/// record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyFilter<T> {
    All,
    Only(T),
    Unrecognized(String),
}

impl<T> Default for KeyFilter<T> {
    fn default() -> Self {
        KeyFilter::All
    }
}

impl<T: FromStr> KeyFilter<T> {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_KEY {
            return KeyFilter::All;
        }
        match raw.parse::<T>() {
            Ok(value) => KeyFilter::Only(value),
            Err(_) => KeyFilter::Unrecognized(raw.to_string()),
        }
    }
}

impl<T> KeyFilter<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, KeyFilter::All)
    }
}

impl<T: PartialEq> KeyFilter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            KeyFilter::All => true,
            KeyFilter::Only(expected) => expected == value,
            KeyFilter::Unrecognized(_) => false,
        }
    }
}

impl<T: fmt::Display> fmt::Display for KeyFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyFilter::All => f.write_str(ALL_KEY),
            KeyFilter::Only(value) => write!(f, "{value}"),
            KeyFilter::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

impl<T: fmt::Display> Serialize for KeyFilter<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: FromStr> Deserialize<'de> for KeyFilter<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(KeyFilter::parse(&raw))
    }
}

/// Time restriction: a whole year, a quarter of the pinned year, or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimePeriod {
    #[default]
    All,
    Year(i32),
    Quarter(Quarter),
    Unrecognized(String),
}

impl TimePeriod {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_KEY {
            return TimePeriod::All;
        }
        if let Ok(quarter) = raw.parse::<Quarter>() {
            return TimePeriod::Quarter(quarter);
        }
        if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(year) = raw.parse::<i32>() {
                return TimePeriod::Year(year);
            }
        }
        TimePeriod::Unrecognized(raw.to_string())
    }

    /// Quarter periods only admit records from `quarter_year`.
    pub fn matches(&self, record: &SalesRecord, quarter_year: i32) -> bool {
        match self {
            TimePeriod::All => true,
            TimePeriod::Year(year) => record.year == *year,
            TimePeriod::Quarter(quarter) => {
                record.quarter == *quarter && record.year == quarter_year
            }
            TimePeriod::Unrecognized(_) => false,
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimePeriod::All => f.write_str(ALL_KEY),
            TimePeriod::Year(year) => write!(f, "{year}"),
            TimePeriod::Quarter(quarter) => f.write_str(quarter.label()),
            TimePeriod::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// The three dropdown-driven filters, passed by value on every evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub category: KeyFilter<Category>,
    pub region: KeyFilter<Region>,
    pub time_period: TimePeriod,
}

impl FilterCriteria {
    /// Builds criteria from the raw control values, e.g. `("Books", "all", "Q2")`.
    pub fn parse(category: &str, region: &str, time_period: &str) -> Self {
        Self {
            category: KeyFilter::parse(category),
            region: KeyFilter::parse(region),
            time_period: TimePeriod::parse(time_period),
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = KeyFilter::Only(category);
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = KeyFilter::Only(region);
        self
    }

    pub fn with_time_period(mut self, time_period: TimePeriod) -> Self {
        self.time_period = time_period;
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(&self, record: &SalesRecord, quarter_year: i32) -> bool {
        self.category.matches(&record.category)
            && self.region.matches(&record.region)
            && self.time_period.matches(record, quarter_year)
    }
}
