//! Error types for buffer access and filter operations.

use thiserror::Error;

/// Error type for buffer access and filter operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Zero-area raster, or raw data that does not match the stated dimensions.
    #[error("invalid buffer: {0}")]
    InvalidBuffer(String),

    /// Parameter outside its domain (e.g. a divisor that would be zero).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Direct pixel access outside the buffer.
    #[error("pixel ({x}, {y}) out of range for {width}x{height} buffer")]
    IndexOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Result type for buffer access and filter operations.
pub type FilterResult<T> = Result<T, FilterError>;
