//! Serialization of binary images
//!
//! Two representations are supported:
//!
//! - **Little-endian words**: the raw raster as `height * stride * 4` bytes,
//!   each 32-bit word stored little-endian. This is the byte view that host
//!   environments hand over when they share a pixel buffer.
//! - **ASCII art**: one text line per row, `#` for ON and `.` for OFF.
//!   Parsing also accepts `1` and `0`. Used for readable test fixtures and
//!   golden files.

use super::{BitImage, BitmapLayout};
use crate::error::{Error, Result};
use std::io::{BufRead, BufReader, Read, Write};

/// Decode a little-endian byte buffer into 32-bit words.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `bytes.len()` is not a multiple
/// of 4.
pub fn words_from_le_bytes(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        return Err(Error::InvalidParameter(format!(
            "byte length {} is not a multiple of 4",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Encode 32-bit words into a little-endian byte buffer.
///
/// Writes `min(words.len(), bytes.len() / 4)` words; trailing bytes are left
/// untouched.
pub fn write_words_le(words: &[u32], bytes: &mut [u8]) {
    for (chunk, w) in bytes.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&w.to_le_bytes());
    }
}

impl BitImage {
    /// Create an image from a little-endian byte buffer.
    ///
    /// Only the first `height * stride * 4` bytes are used.
    ///
    /// # Errors
    ///
    /// Returns an error for zero dimensions, a buffer shorter than the
    /// layout, or a length that is not a multiple of 4.
    pub fn from_le_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let layout = BitmapLayout::new(width, height)?;
        let mut words = words_from_le_bytes(bytes)?;
        layout.check_words(words.len())?;
        words.truncate(layout.required_words()?);
        Self::from_words(width, height, words)
    }

    /// Serialize the raster as little-endian words.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; self.data().len() * 4];
        write_words_le(self.data(), &mut bytes);
        bytes
    }

    /// Build an image from ASCII rows.
    ///
    /// `#` and `1` are ON, `.` and `0` are OFF. All rows must have the same
    /// non-zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// use scanfill_core::BitImage;
    ///
    /// let pix = BitImage::from_ascii(&["#.#", "###"]).unwrap();
    /// assert_eq!(pix.width(), 3);
    /// assert_eq!(pix.count_pixels(), 5);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for ragged rows or unknown
    /// characters, and [`Error::InvalidDimension`] for empty input.
    pub fn from_ascii<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut pix = Self::new(width as u32, rows.len() as u32)?;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(Error::InvalidParameter(format!(
                    "row {} has length {}, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, c) in row.chars().enumerate() {
                match c {
                    '#' | '1' => pix.set_pixel_unchecked(x as u32, y as u32, 1),
                    '.' | '0' => {}
                    other => {
                        return Err(Error::InvalidParameter(format!(
                            "unexpected character {:?} at ({}, {})",
                            other, x, y
                        )));
                    }
                }
            }
        }
        Ok(pix)
    }

    /// Render the image as ASCII rows, each terminated by `\n`.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width() as usize + 1) * self.height() as usize);
        for y in 0..self.height() {
            for x in 0..self.width() {
                out.push(if self.get_pixel_unchecked(x, y) != 0 {
                    '#'
                } else {
                    '.'
                });
            }
            out.push('\n');
        }
        out
    }

    /// Write the ASCII rendering to a writer.
    pub fn write_ascii(&self, writer: &mut impl Write) -> Result<()> {
        writer.write_all(self.to_ascii().as_bytes())?;
        Ok(())
    }

    /// Read an ASCII rendering from a reader. Blank lines are skipped.
    pub fn read_ascii(reader: impl Read) -> Result<Self> {
        let mut rows = Vec::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let line = line.trim_end();
            if !line.is_empty() {
                rows.push(line.to_string());
            }
        }
        Self::from_ascii(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_le_bytes_layout() {
        let mut pix = BitImage::new(40, 1).unwrap();
        pix.set_pixel(0, 0, 1).unwrap();
        pix.set_pixel(9, 0, 1).unwrap();
        pix.set_pixel(32, 0, 1).unwrap();
        let bytes = pix.to_le_bytes();
        assert_eq!(bytes, vec![0x01, 0x02, 0, 0, 0x01, 0, 0, 0]);

        let back = BitImage::from_le_bytes(40, 1, &bytes).unwrap();
        assert_eq!(back, pix);
    }

    #[test]
    fn test_from_le_bytes_validation() {
        assert!(BitImage::from_le_bytes(40, 1, &[0; 7]).is_err());
        assert!(BitImage::from_le_bytes(40, 1, &[0; 4]).is_err());
        let pix = BitImage::from_le_bytes(40, 1, &[0xff; 12]).unwrap();
        assert_eq!(pix.data().len(), 2);
    }

    #[test]
    fn test_words_from_le_bytes() {
        let words = words_from_le_bytes(&[1, 0, 0, 0x80, 2, 0, 0, 0]).unwrap();
        assert_eq!(words, vec![0x8000_0001, 2]);
        assert!(words_from_le_bytes(&[0; 3]).is_err());
    }

    #[test]
    fn test_ascii_roundtrip() {
        let rows = ["#..#", ".##.", "####"];
        let pix = BitImage::from_ascii(&rows).unwrap();
        assert_eq!(pix.to_ascii(), "#..#\n.##.\n####\n");
    }

    #[test]
    fn test_from_ascii_digits() {
        let pix = BitImage::from_ascii(&["1010"]).unwrap();
        assert_eq!(pix.data(), &[0b0101]);
    }

    #[test]
    fn test_from_ascii_errors() {
        assert!(BitImage::from_ascii(&["##", "#"]).is_err());
        assert!(BitImage::from_ascii(&["#x"]).is_err());
        assert!(BitImage::from_ascii::<&str>(&[]).is_err());
    }

    #[test]
    fn test_read_write_ascii() {
        let pix = BitImage::from_ascii(&["#.", ".#"]).unwrap();
        let mut buf = Vec::new();
        pix.write_ascii(&mut buf).unwrap();
        let back = BitImage::read_ascii(&buf[..]).unwrap();
        assert_eq!(back, pix);
    }
}
