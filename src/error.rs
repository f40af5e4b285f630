//! Error types for grid_astar.

use thiserror::Error;

/// Failures raised by [CostGrid](crate::CostGrid) construction and cell
/// access. Search itself never fails: an unreachable finish is a normal
/// [None] outcome, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
