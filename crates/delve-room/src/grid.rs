//! Owned integer grids for per-cell room data.
//!
//! A room keeps one [`Grid`] of movement penalties and one of dynamic
//! obstacle flags. Grids own their storage so a room can be shared across
//! threads behind an `Arc`.

use delve_core::{Point, Range};

/// A 2D grid of `i32` values anchored at the origin, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    bounds: Range,
    cells: Vec<i32>,
}

impl Grid {
    /// Create a grid filled with `0`.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Create a grid with every cell set to `value`.
    pub fn filled(width: i32, height: i32, value: i32) -> Self {
        let bounds = Range::with_size(width, height);
        Self {
            bounds,
            cells: vec![value; bounds.len()],
        }
    }

    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Value at `p`, or `None` out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<i32> {
        self.bounds.index_of(p).map(|i| self.cells[i])
    }

    /// Set the value at `p`. Returns `false` (and does nothing) out of
    /// bounds.
    pub fn set(&mut self, p: Point, value: i32) -> bool {
        match self.bounds.index_of(p) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, value: i32) {
        self.cells.fill(value);
    }

    /// Set every cell from a function of its position.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> i32) {
        for (p, c) in self.bounds.iter().zip(self.cells.iter_mut()) {
            *c = f(p);
        }
    }

    /// Number of cells equal to `value`.
    pub fn count(&self, value: i32) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// `(Point, value)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, i32)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}
