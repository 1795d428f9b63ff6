//! Error types for scanfill-region

use thiserror::Error;

/// Errors that can occur during region filling operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error (dimensions, stride, buffer size)
    #[error("core error: {0}")]
    Core(#[from] scanfill_core::Error),

    /// Byte buffer length is not a whole number of 32-bit words
    #[error("unaligned buffer: {len} bytes is not a multiple of 4")]
    UnalignedBuffer { len: usize },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
