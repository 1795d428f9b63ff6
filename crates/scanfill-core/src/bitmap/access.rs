//! Pixel access functions
//!
//! Low-level functions for addressing individual bits of a packed 1 bpp
//! bitmap.
//!
//! # Pixel packing
//!
//! Pixels are packed LSB-to-MSB within each 32-bit word. Pixel 0 of a row
//! occupies bit 0 of the row's first word and pixel 31 occupies bit 31.
//! Serialized as little-endian words, this is also LSB-first byte order,
//! so byte `x >> 3` of a row holds pixel `x` at bit `x & 7`.

use super::BitImage;
use crate::error::{Error, Result};

/// Number of 32-bit words needed to hold one row of `width` pixels.
#[inline]
pub fn stride_for_width(width: u32) -> u32 {
    width.div_ceil(32)
}

/// Word index and bit mask addressing a single pixel.
///
/// `BitPos` is the unit that scanline traversals move around. Stepping
/// right or left keeps `word` and `mask` synchronized across word
/// boundaries, so callers never recompute `y * stride + (x >> 5)` inside
/// a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitPos {
    /// Index of the word holding the pixel
    pub word: usize,
    /// Single-bit mask selecting the pixel within `word`
    pub mask: u32,
}

impl BitPos {
    /// Address pixel `(x, y)` in a bitmap with `stride` words per row.
    #[inline]
    pub fn at(x: u32, y: u32, stride: u32) -> Self {
        Self {
            word: y as usize * stride as usize + (x >> 5) as usize,
            mask: 1 << (x & 31),
        }
    }

    /// Move one pixel to the right.
    ///
    /// Past bit 31 the mask wraps to bit 0 of the next word.
    #[inline]
    pub fn step_right(&mut self) {
        self.mask = self.mask.rotate_left(1);
        if self.mask == 1 {
            self.word += 1;
        }
    }

    /// Move one pixel to the left.
    ///
    /// Below bit 0 the mask wraps to bit 31 of the previous word. The caller
    /// must not step left from the first pixel of a row.
    #[inline]
    pub fn step_left(&mut self) {
        if self.mask == 1 {
            self.word -= 1;
        }
        self.mask = self.mask.rotate_right(1);
    }

    /// The position one pixel to the left.
    #[inline]
    pub fn left(self) -> Self {
        let mut pos = self;
        pos.step_left();
        pos
    }

    /// The same column one row up. The caller must not be on row 0.
    #[inline]
    pub fn above(self, stride: u32) -> Self {
        Self {
            word: self.word - stride as usize,
            mask: self.mask,
        }
    }

    /// The same column one row down.
    #[inline]
    pub fn below(self, stride: u32) -> Self {
        Self {
            word: self.word + stride as usize,
            mask: self.mask,
        }
    }

    /// Whether the addressed bit is set in `data`.
    #[inline]
    pub fn test(self, data: &[u32]) -> bool {
        data[self.word] & self.mask != 0
    }

    /// Set the addressed bit in `data`.
    #[inline]
    pub fn set(self, data: &mut [u32]) {
        data[self.word] |= self.mask;
    }
}

impl BitImage {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking against the width.
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the data buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        get_data_bit(self.row(y), x)
    }

    /// Set a pixel value at (x, y). Any non-zero `val` sets the pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking against the width.
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the data buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        set_data_bit(self.row_mut(y), x, val);
    }
}

/// Get a 1-bit pixel value from a row.
///
/// Pixels are packed LSB to MSB within each 32-bit word.
#[inline]
pub fn get_data_bit(line: &[u32], x: u32) -> u32 {
    (line[(x >> 5) as usize] >> (x & 31)) & 1
}

/// Set a 1-bit pixel value in a row. Any non-zero `val` sets the bit.
#[inline]
pub fn set_data_bit(line: &mut [u32], x: u32, val: u32) {
    if val != 0 {
        set_data_bit_val(line, x);
    } else {
        clear_data_bit(line, x);
    }
}

/// Set a 1-bit pixel to 1.
#[inline]
pub fn set_data_bit_val(line: &mut [u32], x: u32) {
    line[(x >> 5) as usize] |= 1 << (x & 31);
}

/// Clear a 1-bit pixel to 0.
#[inline]
pub fn clear_data_bit(line: &mut [u32], x: u32) {
    line[(x >> 5) as usize] &= !(1 << (x & 31));
}
