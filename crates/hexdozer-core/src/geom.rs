//! Geometry primitives: [`Hex`] and [`HexRange`].
//!
//! Cells use axial `(q, r)` coordinates on a flat-top hex layout. `q` grows
//! towards the south-east column, `r` grows towards the south.

use std::fmt;

use crate::facing::Facing;

// ---------------------------------------------------------------------------
// Hex
// ---------------------------------------------------------------------------

/// A hex cell in axial coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { q: 0, r: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Implicit third cube coordinate, `s = -q - r`.
    #[inline]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// The adjacent cell in direction `facing`.
    #[inline]
    pub const fn neighbor(self, facing: Facing) -> Self {
        let (dq, dr) = facing.offset();
        Self::new(self.q + dq, self.r + dr)
    }

    /// All six neighbours in facing order (N first, clockwise).
    #[inline]
    pub fn neighbors(self) -> [Hex; 6] {
        Facing::ALL.map(|f| self.neighbor(f))
    }

    /// Cube distance: the number of single steps between two cells.
    #[inline]
    pub fn distance(self, other: Hex) -> i32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        dq.max(dr).max(ds)
    }

    /// Cell centre in unit-less screen space (y grows down).
    #[inline]
    fn center(self) -> (f64, f64) {
        let x = 1.5 * f64::from(self.q);
        let y = 3f64.sqrt() * (f64::from(self.r) + f64::from(self.q) / 2.0);
        (x, y)
    }

    /// Bearing towards `other` in whole degrees, clockwise from north, in
    /// `[0, 360)`. Returns 0 when both cells coincide.
    pub fn degree_to(self, other: Hex) -> i32 {
        if self == other {
            return 0;
        }
        let (x0, y0) = self.center();
        let (x1, y1) = other.center();
        let rad = (x1 - x0).atan2(-(y1 - y0));
        (rad.to_degrees().round() as i32).rem_euclid(360)
    }

    /// Facing closest to the bearing towards `other`.
    ///
    /// A bearing exactly between two facings resolves counter-clockwise.
    pub fn direction_to(self, other: Hex) -> Facing {
        Facing::from_index((self.degree_to(other) + 29) / 60)
    }

    /// Whether `other` lies on one of the six straight lines through `self`.
    #[inline]
    pub fn on_spine(self, other: Hex) -> bool {
        self.degree_to(other) % 60 == 0
    }
}

impl PartialOrd for Hex {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hex {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.r.cmp(&other.r).then(self.q.cmp(&other.q))
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

// ---------------------------------------------------------------------------
// HexRange
// ---------------------------------------------------------------------------

/// A half-open rhombus of cells \[min, max) over axial coordinates.
///
/// `min` is inclusive, `max` is exclusive on both axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexRange {
    pub min: Hex,
    pub max: Hex,
}

impl HexRange {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(q0: i32, r0: i32, q1: i32, r1: i32) -> Self {
        Self {
            min: Hex::new(q0.min(q1), r0.min(r1)),
            max: Hex::new(q0.max(q1), r0.max(r1)),
        }
    }

    /// A range anchored at the origin with `cols` × `rows` cells.
    #[inline]
    pub fn with_size(cols: i32, rows: i32) -> Self {
        Self::new(0, 0, cols, rows)
    }

    /// Number of columns (`q` extent).
    #[inline]
    pub fn cols(self) -> i32 {
        self.max.q - self.min.q
    }

    /// Number of rows (`r` extent).
    #[inline]
    pub fn rows(self) -> i32 {
        self.max.r - self.min.r
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.cols() as usize) * (self.rows() as usize)
    }

    /// Whether the range holds no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.q >= self.max.q || self.min.r >= self.max.r
    }

    /// Whether `h` is inside the range.
    #[inline]
    pub fn contains(self, h: Hex) -> bool {
        h.q >= self.min.q && h.q < self.max.q && h.r >= self.min.r && h.r < self.max.r
    }

    /// Flat row-major index of `h`, or `None` outside the range.
    #[inline]
    pub fn index_of(self, h: Hex) -> Option<usize> {
        if !self.contains(h) {
            return None;
        }
        let q = (h.q - self.min.q) as usize;
        let r = (h.r - self.min.r) as usize;
        Some(r * self.cols() as usize + q)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn iter(self) -> HexRangeIter {
        HexRangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for HexRange {
    type Item = Hex;
    type IntoIter = HexRangeIter;
    #[inline]
    fn into_iter(self) -> HexRangeIter {
        self.iter()
    }
}

impl fmt::Display for HexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Row-major iterator over the cells of a [`HexRange`].
#[derive(Clone, Debug)]
pub struct HexRangeIter {
    range: HexRange,
    cur: Hex,
}

impl Iterator for HexRangeIter {
    type Item = Hex;

    #[inline]
    fn next(&mut self) -> Option<Hex> {
        if self.cur.r >= self.range.max.r || self.range.is_empty() {
            return None;
        }
        let h = self.cur;
        self.cur.q += 1;
        if self.cur.q >= self.range.max.q {
            self.cur.q = self.range.min.q;
            self.cur.r += 1;
        }
        Some(h)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.r >= self.range.max.r {
            return (0, Some(0));
        }
        let w = self.range.cols() as usize;
        let remaining_in_row = (self.range.max.q - self.cur.q) as usize;
        let remaining_rows = (self.range.max.r - self.cur.r - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for HexRangeIter {}
