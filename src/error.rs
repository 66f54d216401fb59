//! Error types for graph configuration and series management.
//!
//! Numeric input on axes is never an error: invalid ranges are corrected in
//! place and logged. These errors cover misuse of the graph API itself.

use thiserror::Error;

use crate::series::SeriesId;

/// Errors returned by graph, formatter, and configuration operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The series is not owned by this graph.
    #[error("unknown series {0:?}")]
    UnknownSeries(SeriesId),

    /// Logarithm base must be zero (natural log) or a positive value other than one.
    #[error("invalid logarithm base {0}")]
    LogBase(f64),

    /// Visible items exceed the 24-bit selection color space.
    #[error("selection buffer can address {max} items, {requested} requested")]
    SelectionCapacity {
        /// Number of items that were requested.
        requested: usize,
        /// Maximum addressable item count.
        max: usize,
    },

    /// Configuration failed to parse.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
