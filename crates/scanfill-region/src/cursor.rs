//! Span cursor
//!
//! [`SpanCursor`] walks one row of a source/destination bitmap pair. The
//! source, destination, row-above and row-below addresses are all derived
//! from a single [`BitPos`], so they stay in lockstep as the cursor moves.

use scanfill_core::BitPos;

/// Cursor over a source mask and a destination bitmap sharing one layout.
///
/// Every query indexes the slices directly; callers keep the position
/// inside the image (`x < width`, and `y > 0` / `y < height - 1` before
/// looking above / below).
pub struct SpanCursor<'a> {
    source: &'a [u32],
    destination: &'a mut [u32],
    stride: u32,
    pos: BitPos,
}

impl<'a> SpanCursor<'a> {
    /// Create a cursor at `pos`.
    pub fn new(source: &'a [u32], destination: &'a mut [u32], stride: u32, pos: BitPos) -> Self {
        Self {
            source,
            destination,
            stride,
            pos,
        }
    }

    /// Current position.
    #[inline]
    pub fn pos(&self) -> BitPos {
        self.pos
    }

    /// Source bit at the cursor is 1.
    #[inline]
    pub fn fillable(&self) -> bool {
        self.pos.test(self.source)
    }

    /// Destination bit at the cursor is 1.
    #[inline]
    pub fn filled(&self) -> bool {
        self.pos.test(self.destination)
    }

    /// Set the destination bit at the cursor.
    #[inline]
    pub fn mark(&mut self) {
        self.pos.set(self.destination);
    }

    /// Source bit one pixel to the left is 1. Not valid at `x == 0`.
    #[inline]
    pub fn fillable_left(&self) -> bool {
        self.pos.left().test(self.source)
    }

    /// Move one pixel left. Not valid at `x == 0`.
    #[inline]
    pub fn step_left(&mut self) {
        self.pos.step_left();
    }

    /// Move one pixel right.
    #[inline]
    pub fn step_right(&mut self) {
        self.pos.step_right();
    }

    /// Source bit directly above is 1. Not valid on row 0.
    #[inline]
    pub fn fillable_above(&self) -> bool {
        self.pos.above(self.stride).test(self.source)
    }

    /// Destination bit directly above is 0. Not valid on row 0.
    #[inline]
    pub fn unvisited_above(&self) -> bool {
        !self.pos.above(self.stride).test(self.destination)
    }

    /// Source bit directly below is 1. Not valid on the last row.
    #[inline]
    pub fn fillable_below(&self) -> bool {
        self.pos.below(self.stride).test(self.source)
    }

    /// Destination bit directly below is 0. Not valid on the last row.
    #[inline]
    pub fn unvisited_below(&self) -> bool {
        !self.pos.below(self.stride).test(self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_rows_follow_position() {
        // 40x3 image, stride 2; column 31 set in every source row,
        // column 32 set only in the middle row
        let stride = 2;
        let source = vec![1 << 31, 0, 1 << 31, 1, 1 << 31, 0];
        let mut destination = vec![0u32; 6];

        let mut cursor = SpanCursor::new(&source, &mut destination, stride, BitPos::at(31, 1, 2));
        assert!(cursor.fillable());
        assert!(cursor.fillable_above());
        assert!(cursor.fillable_below());

        cursor.step_right();
        assert_eq!(cursor.pos(), BitPos::at(32, 1, 2));
        assert!(cursor.fillable());
        assert!(!cursor.fillable_above());
        assert!(!cursor.fillable_below());
        assert!(cursor.fillable_left());

        cursor.mark();
        assert!(cursor.filled());
        assert_eq!(destination, vec![0, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_cursor_unvisited() {
        let source = vec![1, 1, 1];
        let mut destination = vec![1, 0, 0];
        let cursor = SpanCursor::new(&source, &mut destination, 1, BitPos::at(0, 1, 1));
        assert!(!cursor.filled());
        assert!(!cursor.unvisited_above());
        assert!(cursor.unvisited_below());
    }
}
