use delve_core::Point;
use glam::Vec2;

/// Read-only view of a room's movement costs, in room-local cells.
///
/// Searches never write through this trait; the owner may change the
/// underlying grids between calls.
pub trait TerrainLookup {
    /// Extra traversal cost of entering `p`. `0` means impassable.
    fn penalty(&self, p: Point) -> i32;

    /// Dynamic obstacle flag of `p`. `0` means the cell is occupied.
    fn obstacle(&self, p: Point) -> i32;

    /// Whether an agent may enter `p`.
    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        self.penalty(p) != 0 && self.obstacle(p) != 0
    }
}

/// Converts room-local cells to world positions (cell centers).
pub trait CellToWorld {
    fn cell_to_world(&self, local: Point) -> Vec2;
}

/// A [`TerrainLookup`] made from two closures.
///
/// ```
/// use delve_core::Point;
/// use delve_paths::{TerrainFn, TerrainLookup};
///
/// let terrain = TerrainFn::new(|p: Point| if p.x == 2 { 0 } else { 1 }, |_| 1);
/// assert!(!terrain.is_walkable(Point::new(2, 0)));
/// ```
pub struct TerrainFn<P, O> {
    penalty: P,
    obstacle: O,
}

impl<P, O> TerrainFn<P, O>
where
    P: Fn(Point) -> i32,
    O: Fn(Point) -> i32,
{
    pub fn new(penalty: P, obstacle: O) -> Self {
        Self { penalty, obstacle }
    }
}

impl<P, O> TerrainLookup for TerrainFn<P, O>
where
    P: Fn(Point) -> i32,
    O: Fn(Point) -> i32,
{
    #[inline]
    fn penalty(&self, p: Point) -> i32 {
        (self.penalty)(p)
    }

    #[inline]
    fn obstacle(&self, p: Point) -> i32 {
        (self.obstacle)(p)
    }
}

impl<T: TerrainLookup + ?Sized> TerrainLookup for &T {
    #[inline]
    fn penalty(&self, p: Point) -> i32 {
        (**self).penalty(p)
    }

    #[inline]
    fn obstacle(&self, p: Point) -> i32 {
        (**self).obstacle(p)
    }
}

impl<F: Fn(Point) -> Vec2> CellToWorld for F {
    #[inline]
    fn cell_to_world(&self, local: Point) -> Vec2 {
        self(local)
    }
}
