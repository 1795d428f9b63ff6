//! scanfill-core - Basic data structures for binary image filling
//!
//! This crate provides the fundamental data structures used throughout
//! the scanfill workspace:
//!
//! - [`BitImage`] - Packed 1 bpp image container
//! - [`BitmapLayout`] - Validated width / height / stride geometry
//! - [`BitPos`] - Word index + bit mask addressing a single pixel
//!
//! plus the raster operations and serialization helpers built on them.

pub mod bitmap;
pub mod error;

pub use bitmap::serial::{words_from_le_bytes, write_words_le};
pub use bitmap::{
    BitImage, BitPos, BitmapLayout, clear_data_bit, get_data_bit, set_data_bit, set_data_bit_val,
    stride_for_width,
};
pub use error::{Error, Result};
