//! Error types for the simulation engine

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong inside the engine and its file boundary
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: usize, height: usize },

    #[error("{pixels} pixels is not divisible by the cell scale {scale}")]
    NotDivisible { pixels: usize, scale: usize },

    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("no snapshot has been saved")]
    NoSnapshot,

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// `row` is the zero-based y of the data row, not the file line
    #[error("malformed row {row}: {detail}")]
    MalformedBody { row: usize, detail: String },

    #[error("expected {expected} data rows, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LifeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = LifeError::MalformedBody {
            row: 1,
            detail: "length 2, expected 3".to_string(),
        };
        assert_eq!(err.to_string(), "malformed row 1: length 2, expected 3");

        let err = LifeError::OutOfBounds { x: 5, y: 0, width: 5, height: 4 };
        assert!(err.to_string().contains("(5, 0)"));
        assert!(err.to_string().contains("5x4"));
    }
}
