use thiserror::Error;

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Failures raised while ingesting records or loading configuration.
///
/// The filtering and aggregation services never return these; bad input is
/// absorbed into empty or zero results instead.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Malformed record: missing or invalid `{field}`")]
    MalformedRecord { field: &'static str },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
