//! Error types for compass.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CompassError>;

/// Errors surfaced by the configuration and CLI layers.
///
/// The analysis engine itself never returns these: catalog problems degrade
/// to empty catalogs and provider failures degrade to neutral scores, per
/// the report's `degraded` flag.
#[derive(Debug, Error)]
pub enum CompassError {
    #[error("config error: {0}")]
    Config(String),

    #[error("missing config: {0}")]
    MissingConfig(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("embedding error: {0}")]
    Embedding(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
