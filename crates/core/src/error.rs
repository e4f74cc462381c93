//! Error types for HeatGrid

use thiserror::Error;

/// Main error type for HeatGrid operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("grid of {rows}x{cols} cells needs {expected} samples, got {actual}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("a multi-stop gradient needs at least 2 stop colors, got {count}")]
    NotEnoughStops { count: usize },

    #[error("gradient table is empty")]
    EmptyGradient,

    #[error("unusable draw target: {0}")]
    InvalidTarget(String),
}

/// Result type alias for HeatGrid operations
pub type Result<T> = std::result::Result<T, Error>;
