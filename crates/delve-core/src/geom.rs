//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Both are plain integer cell types. A [`Point`] names one grid cell; a
//! [`Range`] is the half-open rectangle of cells a room occupies.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer cell coordinate. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// A range anchored at the origin with the given width and height.
    ///
    /// Negative dimensions collapse to an empty range.
    #[inline]
    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            min: Point::ZERO,
            max: Point::new(width.max(0), height.max(0)),
        }
    }

    /// Size as a `Point` (width = max.x - min.x, height = max.y - min.y).
    #[inline]
    pub fn size(self) -> Point {
        Point::new(self.max.x - self.min.x, self.max.y - self.min.y)
    }

    /// Width of the range.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the range.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major flat index of `p` relative to `min`, or `None` outside.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let x = (p.x - self.min.x) as usize;
        let y = (p.y - self.min.y) as usize;
        Some(y * self.width() as usize + x)
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl Add<Point> for Range {
    type Output = Range;

    /// Translate the range by `p`.
    #[inline]
    fn add(self, p: Point) -> Range {
        Range {
            min: self.min + p,
            max: self.max + p,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.x - self.cur.x) as usize;
        let remaining_rows = (self.range.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn range_round_trip() {
        let r = Range::new(1, 2, 10, 20);
        let json = serde_json::to_string(&r).unwrap();
        let back: Range = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
