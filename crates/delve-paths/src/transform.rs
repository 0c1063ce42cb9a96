//! Room-local ↔ world coordinate conversion.
//!
//! A room occupies a rectangle of world cells. Searches run in room-local
//! cells, where `(0, 0)` is the room's lower world-cell bound; waypoints are
//! handed back as world positions at cell centers.

use delve_core::{Point, Range};
use glam::Vec2;

use crate::traits::CellToWorld;

/// Placement of a room's cell grid in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomFrame {
    /// World cell that local `(0, 0)` maps to.
    pub lower: Point,
    /// Room size in cells.
    pub size: Point,
    /// World units per cell.
    pub cell_size: f32,
    /// World position of the corner of world cell `(0, 0)`.
    pub origin: Vec2,
}

impl RoomFrame {
    /// A frame with unit cells and the world origin at zero.
    pub fn new(lower: Point, size: Point) -> Self {
        Self {
            lower,
            size,
            cell_size: 1.0,
            origin: Vec2::ZERO,
        }
    }

    /// A frame from inclusive lower and upper world-cell bounds.
    pub fn from_bounds(lower: Point, upper: Point) -> Self {
        let r = Range::new(lower.x, lower.y, upper.x + 1, upper.y + 1);
        Self::new(r.min, r.size())
    }

    /// Same frame with a different cell size.
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Same frame with a different world origin.
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Local grid bounds, `[0, width) × [0, height)`.
    #[inline]
    pub fn local_bounds(&self) -> Range {
        Range::with_size(self.size.x, self.size.y)
    }

    /// World cells covered by the room.
    #[inline]
    pub fn world_bounds(&self) -> Range {
        self.local_bounds() + self.lower
    }

    /// World cell of a local cell.
    #[inline]
    pub fn local_to_cell(&self, local: Point) -> Point {
        local + self.lower
    }

    /// Local cell of a world cell. The result may lie outside the room.
    #[inline]
    pub fn cell_to_local(&self, cell: Point) -> Point {
        cell - self.lower
    }

    /// World cell containing a world position.
    #[inline]
    pub fn world_to_cell(&self, pos: Vec2) -> Point {
        let rel = (pos - self.origin) / self.cell_size;
        Point::new(rel.x.floor() as i32, rel.y.floor() as i32)
    }

    /// Local cell containing a world position. The result may lie outside
    /// the room; callers reject it or pick another target.
    #[inline]
    pub fn world_to_local(&self, pos: Vec2) -> Point {
        self.cell_to_local(self.world_to_cell(pos))
    }
}

impl CellToWorld for RoomFrame {
    /// Center of the local cell in world space.
    #[inline]
    fn cell_to_world(&self, local: Point) -> Vec2 {
        let cell = self.local_to_cell(local);
        self.origin + (Vec2::new(cell.x as f32, cell.y as f32) + Vec2::splat(0.5)) * self.cell_size
    }
}
