//! Error types for the simulation core

use thiserror::Error;

pub type LifeResult<T> = Result<T, LifeError>;

#[derive(Debug, Error)]
pub enum LifeError {
    /// Grid construction or resize with a size below 1
    #[error("Grid size must be at least 1, got {size}")]
    InvalidDimension { size: usize },

    /// Cell access outside `[0, size)` on either axis
    #[error("Cell ({row}, {col}) out of bounds for {size}x{size} grid")]
    IndexOutOfBounds { row: usize, col: usize, size: usize },

    /// Save record missing a required field or holding the wrong kind of value
    #[error("Malformed save record: {0}")]
    MalformedRecord(String),

    /// Save record whose board disagrees with its declared size
    #[error("Shape mismatch{}: expected {expected}, found {found}", .row.map(|r| format!(" in row {}", r)).unwrap_or_default())]
    ShapeMismatch {
        expected: usize,
        found: usize,
        row: Option<usize>,
    },

    #[error("Save record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl LifeError {
    /// True for errors caused by untrusted input rather than caller misuse
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LifeError::MalformedRecord(_) | LifeError::ShapeMismatch { .. } | LifeError::Json(_)
        )
    }
}
