//! Scanline flood fill
//!
//! Fills the 4-connected component of a seed pixel from a 1 bpp source
//! mask into a 1 bpp destination bitmap. Both bitmaps share one
//! [`BitmapLayout`]; a source bit of 1 means "fillable", a destination bit
//! of 1 means "filled".
//!
//! # Algorithm
//!
//! A stack of pending seeds is drained one entry at a time. Each entry is
//! widened into a span by scanning left to the edge of the fillable run,
//! then the span is filled left to right. While filling, one seed is
//! pushed for each contiguous fillable run in the rows directly above and
//! below, so the stack holds one entry per pending span rather than one
//! per pixel.
//!
//! Destination bits that are already 1 count as visited: a pending seed
//! landing on one is dropped, and no seed is pushed onto one. Filling the
//! same component twice is therefore a no-op, and a destination that
//! already holds other fills is extended rather than reset.
//!
//! Only bits are ever set; the fill never clears a destination bit and
//! never touches row padding.

use crate::cursor::SpanCursor;
use crate::error::{RegionError, RegionResult};
use log::{debug, trace};
use scanfill_core::{BitPos, BitmapLayout, words_from_le_bytes, write_words_le};

/// Counters collected during one fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillStats {
    /// Destination pixels changed from 0 to 1
    pub filled: u64,
    /// Spans expanded from the pending stack
    pub spans: u64,
    /// Largest number of pending seeds held at once
    pub peak_pending: usize,
}

/// Reusable pending-seed stack.
///
/// A `FillScratch` keeps its allocation between fills, so a caller running
/// many fills (one per click, one per border pixel) pays for the stack
/// once. The stack is emptied at the start of every fill and is always
/// empty when a fill returns.
///
/// Each fill needs exclusive access to its scratch; give every thread its
/// own.
///
/// # Examples
///
/// ```
/// use scanfill_core::BitmapLayout;
/// use scanfill_region::FillScratch;
///
/// let layout = BitmapLayout::new(4, 2).unwrap();
/// let source = [0b1111, 0b0011];
/// let mut destination = [0u32; 2];
///
/// let mut scratch = FillScratch::new();
/// let stats = scratch
///     .fill(&layout, 3, 0, &source, &mut destination)
///     .unwrap();
/// assert_eq!(destination, [0b1111, 0b0011]);
/// assert_eq!(stats.filled, 6);
/// ```
#[derive(Debug, Default)]
pub struct FillScratch {
    pending: Vec<(u32, u32)>,
}

impl FillScratch {
    /// Create an empty scratch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scratch with room for `capacity` pending seeds.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: Vec::with_capacity(capacity),
        }
    }

    /// Number of pending seeds the scratch can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.pending.capacity()
    }

    /// Fill the component containing `(seed_x, seed_y)`.
    ///
    /// A seed outside the image is not an error: nothing is filled and
    /// empty stats are returned.
    ///
    /// # Arguments
    ///
    /// * `layout` - Geometry shared by both buffers
    /// * `seed_x`, `seed_y` - Seed coordinate, may be out of range
    /// * `source` - Fillable mask, at least `layout.required_words()` long
    /// * `destination` - Filled bitmap, same minimum length
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::Core`] if either buffer is shorter than the
    /// layout requires. The destination is not touched in that case.
    pub fn fill(
        &mut self,
        layout: &BitmapLayout,
        seed_x: i32,
        seed_y: i32,
        source: &[u32],
        destination: &mut [u32],
    ) -> RegionResult<FillStats> {
        validate(layout, source, destination)?;
        if !layout.contains(i64::from(seed_x), i64::from(seed_y)) {
            debug!(
                "seed ({}, {}) outside {}x{} image, nothing to fill",
                seed_x,
                seed_y,
                layout.width(),
                layout.height()
            );
            return Ok(FillStats::default());
        }
        Ok(self.run(layout, seed_x as u32, seed_y as u32, source, destination))
    }

    /// Fill the component containing `(x, y)`, with unsigned coordinates.
    ///
    /// Behaves like [`FillScratch::fill`]; out-of-range coordinates fill
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::Core`] if either buffer is too short.
    pub fn fill_at(
        &mut self,
        layout: &BitmapLayout,
        x: u32,
        y: u32,
        source: &[u32],
        destination: &mut [u32],
    ) -> RegionResult<FillStats> {
        validate(layout, source, destination)?;
        if x >= layout.width() || y >= layout.height() {
            return Ok(FillStats::default());
        }
        Ok(self.run(layout, x, y, source, destination))
    }

    /// Fill using byte buffers holding little-endian 32-bit words.
    ///
    /// Each buffer needs at least `height * stride * 4` bytes and a length
    /// that is a multiple of 4. The destination bytes are updated before
    /// this returns.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnalignedBuffer`] for a length that is not a
    /// multiple of 4, and [`RegionError::Core`] for a short buffer.
    pub fn fill_bytes(
        &mut self,
        layout: &BitmapLayout,
        seed_x: i32,
        seed_y: i32,
        source: &[u8],
        destination: &mut [u8],
    ) -> RegionResult<FillStats> {
        for len in [source.len(), destination.len()] {
            if len % 4 != 0 {
                debug!("rejecting fill: {} byte buffer is not word aligned", len);
                return Err(RegionError::UnalignedBuffer { len });
            }
        }
        let required = layout.required_words()?;
        layout.check_words(source.len() / 4)?;
        layout.check_words(destination.len() / 4)?;

        let src_words = words_from_le_bytes(&source[..required * 4])?;
        let mut dst_words = words_from_le_bytes(&destination[..required * 4])?;
        let stats = self.fill(layout, seed_x, seed_y, &src_words, &mut dst_words)?;
        if stats.filled > 0 {
            write_words_le(&dst_words, destination);
        }
        Ok(stats)
    }

    fn run(
        &mut self,
        layout: &BitmapLayout,
        seed_x: u32,
        seed_y: u32,
        source: &[u32],
        destination: &mut [u32],
    ) -> FillStats {
        let width = layout.width();
        let height = layout.height();
        let stride = layout.stride();
        let mut stats = FillStats::default();

        self.pending.clear();
        self.pending.push((seed_x, seed_y));
        stats.peak_pending = 1;

        while let Some((x0, y)) = self.pending.pop() {
            let mut cursor =
                SpanCursor::new(source, destination, stride, BitPos::at(x0, y, stride));

            // Already filled, or a seed on a non-fillable pixel
            if cursor.filled() || !cursor.fillable() {
                continue;
            }

            let mut x = x0;
            while x > 0 && cursor.fillable_left() {
                cursor.step_left();
                x -= 1;
            }
            stats.spans += 1;

            let mut span_above = false;
            let mut span_below = false;
            while x < width && cursor.fillable() {
                if !cursor.filled() {
                    cursor.mark();
                    stats.filled += 1;
                }

                if y > 0 {
                    if !cursor.fillable_above() {
                        span_above = false;
                    } else if !span_above && cursor.unvisited_above() {
                        self.pending.push((x, y - 1));
                        span_above = true;
                    }
                }
                if y + 1 < height {
                    if !cursor.fillable_below() {
                        span_below = false;
                    } else if !span_below && cursor.unvisited_below() {
                        self.pending.push((x, y + 1));
                        span_below = true;
                    }
                }
                stats.peak_pending = stats.peak_pending.max(self.pending.len());

                x += 1;
                cursor.step_right();
            }
        }

        trace!(
            "filled {} pixels in {} spans from seed ({}, {}), peak pending {}",
            stats.filled, stats.spans, seed_x, seed_y, stats.peak_pending
        );
        stats
    }
}

fn validate(layout: &BitmapLayout, source: &[u32], destination: &[u32]) -> RegionResult<()> {
    let checked = layout
        .check_words(source.len())
        .and_then(|()| layout.check_words(destination.len()));
    if let Err(e) = checked {
        debug!("rejecting fill on {}x{} image: {}", layout.width(), layout.height(), e);
        return Err(e.into());
    }
    Ok(())
}

/// Fill the 4-connected component of `(seed_x, seed_y)`.
///
/// `source` and `destination` are packed 1 bpp bitmaps of
/// `width x height` pixels with `ceil(width / 32)` words per row (see
/// [`scanfill_core::bitmap`] for the bit order). Every destination pixel
/// reachable from the seed through fillable source pixels is set to 1.
///
/// A seed outside the image is a no-op.
///
/// # Examples
///
/// ```
/// use scanfill_region::scanline_fill;
///
/// // x = 0 and x = 2 fillable, x = 1 blocks
/// let source = [0b0101u32];
/// let mut destination = [0u32];
/// scanline_fill(2, 0, 4, 1, &source, &mut destination).unwrap();
/// assert_eq!(destination, [0b0100]);
/// ```
///
/// # Errors
///
/// Returns an error, before touching either buffer, if `width` or
/// `height` is 0 or if a buffer is shorter than `height * stride` words.
pub fn scanline_fill(
    seed_x: i32,
    seed_y: i32,
    width: u32,
    height: u32,
    source: &[u32],
    destination: &mut [u32],
) -> RegionResult<()> {
    let layout = BitmapLayout::new(width, height)?;
    FillScratch::new().fill(&layout, seed_x, seed_y, source, destination)?;
    Ok(())
}

/// Byte-buffer form of [`scanline_fill`].
///
/// Each buffer is read as little-endian 32-bit words and must hold at
/// least `height * ceil(width / 32) * 4` bytes.
///
/// # Errors
///
/// Returns an error, before touching the destination, for zero
/// dimensions, a short buffer, or a length that is not a multiple of 4.
pub fn scanline_fill_bytes(
    seed_x: i32,
    seed_y: i32,
    width: u32,
    height: u32,
    source: &[u8],
    destination: &mut [u8],
) -> RegionResult<()> {
    let layout = BitmapLayout::new(width, height)?;
    FillScratch::new().fill_bytes(&layout, seed_x, seed_y, source, destination)?;
    Ok(())
}
