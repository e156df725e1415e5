//! Half-open column intervals within a single row.

use std::ops::Range;

/// Column positions `[start, stop)` within one row.
///
/// A token spanning a whole row of length `n` is `[0, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    pub start: usize,
    pub stop: usize,
}

impl Interval {
    /// Create `[start, stop)`. `start` must not exceed `stop`.
    pub const fn new(start: usize, stop: usize) -> Self {
        debug_assert!(start <= stop);
        Self { start, stop }
    }

    /// The length-1 interval covering column `column`.
    pub const fn single(column: usize) -> Self {
        Self::new(column, column + 1)
    }

    pub const fn len(&self) -> usize {
        self.stop - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    /// Standard half-open overlap test; touching intervals do not intersect.
    pub const fn intersects(&self, other: &Interval) -> bool {
        self.start < other.stop && other.start < self.stop
    }

    /// Grow by `by` columns on each side, clipped to `[0, row_len)`.
    pub fn expand(&self, by: usize, row_len: usize) -> Interval {
        Interval::new(
            self.start.saturating_sub(by).min(row_len),
            self.stop.saturating_add(by).min(row_len),
        )
    }

    /// The bytes of `row` covered by this interval, clipped to the row.
    pub fn slice<'a>(&self, row: &'a [u8]) -> &'a [u8] {
        let stop = self.stop.min(row.len());
        &row[self.start.min(stop)..stop]
    }

    pub const fn range(&self) -> Range<usize> {
        self.start..self.stop
    }
}

impl From<Range<usize>> for Interval {
    fn from(range: Range<usize>) -> Self {
        Interval::new(range.start, range.end)
    }
}

/// Free-function form of [`Interval::intersects`].
pub fn intersects(a: Interval, b: Interval) -> bool {
    a.intersects(&b)
}
