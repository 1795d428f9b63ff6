//! scanfill-region - Region filling for packed binary images
//!
//! This crate provides:
//!
//! - **Scanline flood fill** - Span-based 4-connected fill over raw word or
//!   byte buffers, with a reusable pending-seed stack
//! - **Seed fill operations** - Image-level fill, component extraction,
//!   binary reconstruction, hole filling and border clearing
//!
//! # Examples
//!
//! ## Filling raw buffers
//!
//! ```
//! use scanfill_region::scanline_fill;
//!
//! // Two rows of four fillable pixels
//! let source = [0b1111u32, 0b1111];
//! let mut destination = [0u32; 2];
//!
//! scanline_fill(0, 0, 4, 2, &source, &mut destination).unwrap();
//! assert_eq!(destination, [0b1111, 0b1111]);
//! ```
//!
//! ## Flood fill on images
//!
//! ```
//! use scanfill_region::seedfill_binary;
//! use scanfill_core::BitImage;
//!
//! let mask = BitImage::from_ascii(&["##.#", "#..#"]).unwrap();
//! let filled = seedfill_binary(&mask, 0, 0).unwrap();
//! assert_eq!(filled.to_ascii(), "##..\n#...\n");
//! ```

pub mod cursor;
pub mod error;
pub mod scanline;
pub mod seedfill;

// Re-export core types
pub use scanfill_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export scanline types and functions
pub use cursor::SpanCursor;
pub use scanline::{FillScratch, FillStats, scanline_fill, scanline_fill_bytes};

// Re-export seedfill functions
pub use seedfill::{clear_border, fill_holes, floodfill, seedfill_binary, seedfill_from_seeds};
