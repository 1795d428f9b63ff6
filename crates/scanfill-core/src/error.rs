//! Error types for scanfill-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Every variant is raised during argument validation, before any pixel
//! data is touched, so a failed call never leaves a bitmap half-written.

use thiserror::Error;

/// scanfill-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Row stride too small for the image width
    #[error("invalid stride: {stride} words per line, need at least {min}")]
    InvalidStride { stride: u32, min: u32 },

    /// Buffer shorter than the layout requires
    #[error("buffer too small: need {required} words, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    /// Buffer size computation overflowed `usize`
    #[error("bitmap size overflows addressable memory")]
    SizeOverflow,

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scanfill operations
pub type Result<T> = std::result::Result<T, Error>;
