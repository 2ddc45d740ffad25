//! Ingestion of sales logs and inventory snapshots from external sources.

pub mod csv_backend;
pub mod json_backend;

use crate::domain::{RawSalesRecord, SalesRecord};
use crate::errors::AnalyticsResult;

/// Ordered, validated sales records ready for the analytics services.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<SalesRecord>,
    skipped: usize,
}

impl RecordStore {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self {
            records,
            skipped: 0,
        }
    }

    /// Converts raw rows, dropping any that are malformed.
    pub fn from_raw<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawSalesRecord>,
    {
        Self::ingest(rows.into_iter().map(Ok))
    }

    /// Keeps every row that parses and converts; the rest are logged and
    /// counted in [`RecordStore::skipped`].
    pub(crate) fn ingest<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = AnalyticsResult<RawSalesRecord>>,
    {
        let mut store = Self::default();
        for (index, row) in rows.into_iter().enumerate() {
            match row.and_then(SalesRecord::try_from) {
                Ok(record) => store.records.push(record),
                Err(err) => {
                    tracing::warn!(index, %err, "skipping malformed sales record");
                    store.skipped += 1;
                }
            }
        }
        tracing::debug!(
            loaded = store.records.len(),
            skipped = store.skipped,
            "ingested sales records"
        );
        store
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<SalesRecord> {
        self.records
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
