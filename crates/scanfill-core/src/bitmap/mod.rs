//! BitImage - 1 bpp image container
//!
//! A `BitImage` is a binary image packed into 32-bit words.
//!
//! # Pixel layout
//!
//! - Image data is stored in 32-bit words, row-major
//! - Every row starts on a 32-bit boundary (`stride` words per row)
//! - Pixels are packed LSB to MSB within each word: pixel `x` of a row
//!   lives in word `x >> 5` at bit `x & 31`
//! - Bits past `width` in the last word of a row are padding; fills never
//!   read or write them
//!
//! The same layout is used by the raw-slice fill entry points, so a
//! `BitImage` can hand its words straight to them without conversion.

mod access;
pub mod rop;
pub mod serial;

pub use access::*;

use crate::error::{Error, Result};

/// Geometry of a packed 1 bpp bitmap.
///
/// Holds the width and height in pixels plus the number of 32-bit words per
/// row. A layout is only constructed through validating constructors, so a
/// `BitmapLayout` value always has non-zero dimensions and a stride large
/// enough for its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitmapLayout {
    width: u32,
    height: u32,
    stride: u32,
}

impl BitmapLayout {
    /// Create a layout whose stride is derived from `width`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            stride: stride_for_width(width),
        })
    }

    /// Create a layout with an explicit stride.
    ///
    /// Useful when the rows of a caller's buffer are padded beyond the
    /// minimum word count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::InvalidStride`] if `stride < ceil(width / 32)`.
    pub fn with_stride(width: u32, height: u32, stride: u32) -> Result<Self> {
        let layout = Self::new(width, height)?;
        if stride < layout.stride {
            return Err(Error::InvalidStride {
                stride,
                min: layout.stride,
            });
        }
        Ok(Self { stride, ..layout })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// 32-bit words per row.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Number of words a buffer must hold for this layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeOverflow`] if `height * stride` does not fit
    /// in `usize`.
    pub fn required_words(&self) -> Result<usize> {
        (self.height as usize)
            .checked_mul(self.stride as usize)
            .ok_or(Error::SizeOverflow)
    }

    /// Check that a buffer of `len` words is large enough for this layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] if `len < height * stride`.
    pub fn check_words(&self, len: usize) -> Result<()> {
        let required = self.required_words()?;
        if len < required {
            return Err(Error::BufferTooSmall {
                required,
                actual: len,
            });
        }
        Ok(())
    }

    /// Whether `(x, y)` lies inside the image.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y)
    }

    /// Mask of the valid (non-padding) bits in the last word of a row.
    #[inline]
    pub fn last_word_mask(&self) -> u32 {
        match self.width & 31 {
            0 => u32::MAX,
            rem => (1u32 << rem) - 1,
        }
    }
}

/// Binary image container
///
/// Owns its pixel words and its [`BitmapLayout`]. The stride is always
/// derived from the width.
///
/// # Examples
///
/// ```
/// use scanfill_core::BitImage;
///
/// let mut pix = BitImage::new(40, 3).unwrap();
/// assert_eq!(pix.stride(), 2);
/// pix.set_pixel(33, 1, 1).unwrap();
/// assert_eq!(pix.get_pixel(33, 1), Some(1));
/// assert_eq!(pix.count_pixels(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitImage {
    layout: BitmapLayout,
    data: Vec<u32>,
}

impl BitImage {
    /// Create a new all-zero image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let layout = BitmapLayout::new(width, height)?;
        let data = vec![0u32; layout.required_words()?];
        Ok(Self { layout, data })
    }

    /// Wrap an existing word buffer.
    ///
    /// The buffer must hold exactly `height * ceil(width / 32)` words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions,
    /// [`Error::BufferTooSmall`] for a short buffer and
    /// [`Error::InvalidParameter`] for an oversized one.
    pub fn from_words(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let layout = BitmapLayout::new(width, height)?;
        layout.check_words(data.len())?;
        let required = layout.required_words()?;
        if data.len() != required {
            return Err(Error::InvalidParameter(format!(
                "expected {} words, got {}",
                required,
                data.len()
            )));
        }
        Ok(Self { layout, data })
    }

    /// Create an all-zero image with the same size as `self`.
    pub fn create_template(&self) -> Self {
        Self {
            layout: self.layout,
            data: vec![0u32; self.data.len()],
        }
    }

    /// Geometry of this image.
    #[inline]
    pub fn layout(&self) -> &BitmapLayout {
        &self.layout
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.layout.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.layout.height
    }

    /// 32-bit words per row.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.layout.stride
    }

    /// Packed pixel words.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Mutable packed pixel words.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Words of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u32] {
        let stride = self.layout.stride as usize;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Mutable words of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u32] {
        let stride = self.layout.stride as usize;
        let start = y as usize * stride;
        &mut self.data[start..start + stride]
    }

    /// Check that `other` has the same width and height.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn check_same_size(&self, other: &BitImage) -> Result<()> {
        if self.width() != other.width() || self.height() != other.height() {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            });
        }
        Ok(())
    }

    /// Zero the padding bits past `width` in every row.
    pub fn clear_padding(&mut self) {
        let mask = self.layout.last_word_mask();
        if mask == u32::MAX {
            return;
        }
        let stride = self.layout.stride as usize;
        for row in self.data.chunks_exact_mut(stride) {
            row[stride - 1] &= mask;
        }
    }

    /// Count the ON pixels, ignoring padding.
    pub fn count_pixels(&self) -> u64 {
        let mask = self.layout.last_word_mask();
        let stride = self.layout.stride as usize;
        self.data
            .chunks_exact(stride)
            .map(|row| {
                let body = &row[..stride - 1];
                body.iter().map(|w| u64::from(w.count_ones())).sum::<u64>()
                    + u64::from((row[stride - 1] & mask).count_ones())
            })
            .sum()
    }

    /// Whether no pixel is ON, ignoring padding.
    pub fn is_zero(&self) -> bool {
        self.count_pixels() == 0
    }

    /// Compare the in-bounds pixels of two images.
    ///
    /// Padding bits are undefined and do not take part in the comparison.
    /// Images of different sizes are never equal.
    pub fn equals(&self, other: &BitImage) -> bool {
        if self.check_same_size(other).is_err() {
            return false;
        }
        let mask = self.layout.last_word_mask();
        let stride = self.layout.stride as usize;
        self.data
            .chunks_exact(stride)
            .zip(other.data.chunks_exact(stride))
            .all(|(a, b)| {
                a[..stride - 1] == b[..stride - 1] && (a[stride - 1] ^ b[stride - 1]) & mask == 0
            })
    }

    /// Set every in-bounds pixel to 0.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}
