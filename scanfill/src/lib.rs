//! scanfill - Bit-packed scanline flood fill for binary masks
//!
//! Computes the 4-connected region reachable from a seed pixel in a 1 bpp
//! mask and marks it in a separate bitmap, the primitive behind "paint
//! bucket" selection on monochrome masks.
//!
//! # Overview
//!
//! - [`BitImage`] / [`BitmapLayout`] - Packed 1 bpp images and their geometry
//! - [`region::scanline_fill`] - Fill over raw 32-bit word buffers
//! - [`region::scanline_fill_bytes`] - Fill over little-endian byte buffers
//! - [`region::FillScratch`] - Reusable pending-seed stack
//! - [`region::fill_holes`], [`region::clear_border`] - Border-driven fills
//!
//! # Example
//!
//! ```
//! use scanfill::BitImage;
//! use scanfill::region::floodfill;
//!
//! let mask = BitImage::from_ascii(&["#.##", "####"]).unwrap();
//! let mut selection = mask.create_template();
//! let filled = floodfill(&mask, &mut selection, 0, 0).unwrap();
//! assert_eq!(filled, 7);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use scanfill_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use scanfill_region as region;
