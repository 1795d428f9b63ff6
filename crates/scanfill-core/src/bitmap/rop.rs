//! Raster operations (ROP)
//!
//! Bitwise operations on whole binary images:
//!
//! - AND, OR, AND-NOT (binary operations on two images)
//! - Invert (NOT, unary operation)
//!
//! Every result has its padding bits cleared.

use super::BitImage;
use crate::error::Result;

impl BitImage {
    /// Bitwise NOT of the image.
    pub fn invert(&self) -> BitImage {
        let mut out = self.clone();
        out.invert_in_place();
        out
    }

    /// Bitwise NOT, in place.
    pub fn invert_in_place(&mut self) {
        for w in self.data_mut() {
            *w = !*w;
        }
        self.clear_padding();
    }

    /// Bitwise AND of two images.
    ///
    /// # Errors
    ///
    /// Returns error if the images have different dimensions.
    pub fn and(&self, other: &BitImage) -> Result<BitImage> {
        self.combine(other, |a, b| a & b)
    }

    /// Bitwise OR of two images.
    ///
    /// # Errors
    ///
    /// Returns error if the images have different dimensions.
    pub fn or(&self, other: &BitImage) -> Result<BitImage> {
        self.combine(other, |a, b| a | b)
    }

    /// `self AND (NOT other)`: removes the ON pixels of `other` from `self`.
    ///
    /// # Errors
    ///
    /// Returns error if the images have different dimensions.
    pub fn and_not(&self, other: &BitImage) -> Result<BitImage> {
        self.combine(other, |a, b| a & !b)
    }

    /// OR `other` into `self`.
    ///
    /// # Errors
    ///
    /// Returns error if the images have different dimensions.
    pub fn or_in_place(&mut self, other: &BitImage) -> Result<()> {
        self.check_same_size(other)?;
        for (d, s) in self.data_mut().iter_mut().zip(other.data()) {
            *d |= *s;
        }
        self.clear_padding();
        Ok(())
    }

    fn combine(&self, other: &BitImage, op: impl Fn(u32, u32) -> u32) -> Result<BitImage> {
        self.check_same_size(other)?;
        let mut out = self.clone();
        for (d, s) in out.data_mut().iter_mut().zip(other.data()) {
            *d = op(*d, *s);
        }
        out.clear_padding();
        Ok(out)
    }
}
