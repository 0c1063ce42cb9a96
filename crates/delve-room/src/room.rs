//! A room: the rectangle of world cells an agent walks in, with its
//! movement penalties and dynamic obstacles.

use delve_core::{Context, Point, Range};
use delve_paths::{
    CellToWorld, Path, PathError, PathFinder, RoomFrame, SearchOutcome, TerrainLookup, octile,
};
use glam::Vec2;

use crate::config::RoomConfig;
use crate::grid::Grid;

/// Obstacle layer value of a free cell.
const FREE: i32 = 1;
/// Obstacle layer value of an occupied cell.
const OCCUPIED: i32 = 0;

/// Terrain and placement of a single room.
///
/// Cells are addressed room-locally: `(0, 0)` is the room's lower world
/// cell. The penalty layer holds static terrain (`0` = wall), the obstacle
/// layer holds movable blockers such as furniture or other agents.
#[derive(Debug, Clone)]
pub struct Room {
    frame: RoomFrame,
    penalties: Grid,
    obstacles: Grid,
    config: RoomConfig,
    finder: PathFinder,
}

impl Room {
    /// A room covering the inclusive world-cell bounds `lower..=upper`,
    /// with default options.
    pub fn new(lower: Point, upper: Point) -> Self {
        Self::with_config(lower, upper, RoomConfig::default())
    }

    /// Like [`new`](Self::new) with explicit options. Every cell starts as
    /// free floor with the configured default penalty.
    pub fn with_config(lower: Point, upper: Point, config: RoomConfig) -> Self {
        let frame = RoomFrame::from_bounds(lower, upper)
            .with_cell_size(config.cell_size)
            .with_origin(config.origin);
        let size = frame.size;
        Self {
            frame,
            penalties: Grid::filled(size.x, size.y, config.default_penalty),
            obstacles: Grid::filled(size.x, size.y, FREE),
            finder: PathFinder::new(config.search.clone()),
            config,
        }
    }

    pub fn frame(&self) -> &RoomFrame {
        &self.frame
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    /// Local cell bounds.
    pub fn bounds(&self) -> Range {
        self.penalties.bounds()
    }

    pub fn penalties(&self) -> &Grid {
        &self.penalties
    }

    pub fn obstacles(&self) -> &Grid {
        &self.obstacles
    }

    /// Set the movement penalty of a local cell. `0` makes it a wall.
    ///
    /// Returns `false`, leaving the cell unchanged, outside the room or for
    /// a negative penalty.
    pub fn set_penalty(&mut self, local: Point, penalty: i32) -> bool {
        if penalty < 0 {
            return false;
        }
        self.penalties.set(local, penalty)
    }

    /// Turn a local cell into wall.
    pub fn set_impassable(&mut self, local: Point) -> bool {
        self.penalties.set(local, 0)
    }

    /// Mark a local cell as occupied by a movable obstacle.
    pub fn place_obstacle(&mut self, local: Point) -> bool {
        self.obstacles.set(local, OCCUPIED)
    }

    pub fn clear_obstacle(&mut self, local: Point) -> bool {
        self.obstacles.set(local, FREE)
    }

    /// Whether an agent may stand on a local cell. Cells outside the room
    /// are never walkable.
    pub fn is_walkable(&self, local: Point) -> bool {
        TerrainLookup::is_walkable(self, local)
    }

    /// Room-local cell containing a world position. May lie outside the
    /// room.
    pub fn world_to_local(&self, pos: Vec2) -> Point {
        self.frame.world_to_local(pos)
    }

    /// World position of a local cell's center.
    pub fn local_to_world(&self, local: Point) -> Vec2 {
        self.frame.cell_to_world(local)
    }

    /// Nearest walkable cell to `goal`, searching up to
    /// [`nudge_radius`](RoomConfig::nudge_radius) rings around it.
    ///
    /// Returns `goal` itself when it is walkable and `None` when it lies
    /// outside the room. Candidates are ranked by octile distance to
    /// `goal`; equal candidates resolve in row-major order, so the choice
    /// is deterministic.
    pub fn nudge_goal(&self, goal: Point) -> Option<Point> {
        if !self.bounds().contains(goal) {
            return None;
        }
        if self.is_walkable(goal) {
            return Some(goal);
        }
        let r = self.config.nudge_radius.max(0);
        Range::new(-r, -r, r + 1, r + 1)
            .iter()
            .filter(|&d| d != Point::ZERO)
            .map(|d| goal + d)
            .filter(|&p| self.is_walkable(p))
            .min_by_key(|&p| octile(goal, p))
    }

    /// Route between two world positions.
    ///
    /// The target is nudged to a free cell first. The returned path starts
    /// at the first cell after the agent's own, so popping it yields the
    /// next place to move to.
    pub fn path_to(&self, from: Vec2, to: Vec2) -> Result<Option<Path>, PathError> {
        let (start, end) = self.endpoints(from, to);
        let path = self
            .finder
            .build_path(self.bounds(), start, end, self, &self.frame)?;
        Ok(path.map(Path::skip_start))
    }

    /// Like [`path_to`](Self::path_to), giving up when `ctx` is cancelled.
    pub fn path_to_with_context(
        &self,
        from: Vec2,
        to: Vec2,
        ctx: &Context,
    ) -> Result<SearchOutcome, PathError> {
        let (start, end) = self.endpoints(from, to);
        let outcome =
            self.finder
                .build_path_with_context(self.bounds(), start, end, self, &self.frame, ctx)?;
        Ok(match outcome {
            SearchOutcome::Found(path) => SearchOutcome::Found(path.skip_start()),
            other => other,
        })
    }

    fn endpoints(&self, from: Vec2, to: Vec2) -> (Point, Point) {
        let start = self.world_to_local(from);
        let target = self.world_to_local(to);
        // Targets outside the room go through untouched so the search
        // rejects them.
        (start, self.nudge_goal(target).unwrap_or(target))
    }
}

impl TerrainLookup for Room {
    #[inline]
    fn penalty(&self, p: Point) -> i32 {
        self.penalties.at(p).unwrap_or(0)
    }

    #[inline]
    fn obstacle(&self, p: Point) -> i32 {
        self.obstacles.at(p).unwrap_or(OCCUPIED)
    }
}

impl CellToWorld for Room {
    #[inline]
    fn cell_to_world(&self, local: Point) -> Vec2 {
        self.frame.cell_to_world(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room::new(Point::new(10, 10), Point::new(14, 14))
    }

    #[test]
    fn new_room_is_open_floor() {
        let r = room();
        assert_eq!(r.bounds(), Range::with_size(5, 5));
        assert_eq!(r.penalties().count(40), 25);
        assert!(r.bounds().iter().all(|p| r.is_walkable(p)));
        assert!(!r.is_walkable(Point::new(5, 0)));
        assert!(!r.is_walkable(Point::new(0, -1)));
    }

    #[test]
    fn world_positions_map_to_local_cells() {
        let r = room();
        assert_eq!(r.world_to_local(Vec2::new(10.5, 10.5)), Point::new(0, 0));
        assert_eq!(r.world_to_local(Vec2::new(14.9, 12.1)), Point::new(4, 2));
        assert_eq!(r.world_to_local(Vec2::new(9.5, 10.5)), Point::new(-1, 0));
        assert_eq!(r.local_to_world(Point::new(4, 2)), Vec2::new(14.5, 12.5));
    }

    #[test]
    fn obstacles_toggle_walkability() {
        let mut r = room();
        let p = Point::new(2, 2);
        assert!(r.place_obstacle(p));
        assert!(!r.is_walkable(p));
        assert!(r.clear_obstacle(p));
        assert!(r.is_walkable(p));
        assert!(r.set_impassable(p));
        assert!(!r.is_walkable(p));
        assert!(!r.place_obstacle(Point::new(9, 9)));
    }

    #[test]
    fn nudge_prefers_orthogonal_neighbors_in_row_major_order() {
        let mut r = room();
        let goal = Point::new(2, 2);
        assert_eq!(r.nudge_goal(goal), Some(goal));

        r.place_obstacle(goal);
        assert_eq!(r.nudge_goal(goal), Some(Point::new(2, 1)));

        r.set_impassable(Point::new(2, 1));
        assert_eq!(r.nudge_goal(goal), Some(Point::new(1, 2)));

        for p in [Point::new(1, 2), Point::new(3, 2), Point::new(2, 3)] {
            r.place_obstacle(p);
        }
        assert_eq!(r.nudge_goal(goal), Some(Point::new(1, 1)));
    }

    #[test]
    fn nudge_gives_up_beyond_radius() {
        let mut r = room();
        for p in Range::new(1, 1, 4, 4) {
            r.place_obstacle(p);
        }
        assert_eq!(r.nudge_goal(Point::new(2, 2)), None);

        let mut wide = Room::with_config(
            Point::new(10, 10),
            Point::new(14, 14),
            RoomConfig {
                nudge_radius: 2,
                ..RoomConfig::default()
            },
        );
        for p in Range::new(1, 1, 4, 4) {
            wide.place_obstacle(p);
        }
        assert_eq!(wide.nudge_goal(Point::new(2, 2)), Some(Point::new(2, 0)));
    }

    #[test]
    fn path_to_skips_own_cell_and_nudges_target() {
        let mut r = room();
        r.place_obstacle(Point::new(4, 4));
        let mut path = r
            .path_to(Vec2::new(10.5, 10.5), Vec2::new(14.5, 14.5))
            .unwrap()
            .expect("open room has a route");

        let first = path.cells().next().unwrap();
        assert_ne!(first, Point::ZERO);
        assert!(octile(first, Point::ZERO) <= 14);
        // (4, 4) is blocked; the nudged goal is its first orthogonal
        // neighbor in row-major order.
        assert_eq!(path.cells().last(), Some(Point::new(4, 3)));
        assert_eq!(path.destination(), Some(Vec2::new(14.5, 13.5)));
        assert_eq!(path.cost(), 3 * 14 + 10 + 4 * 40);
        assert_eq!(path.pop(), Some(r.local_to_world(first)));
    }

    #[test]
    fn path_to_costs_include_penalties() {
        let r = room();
        let path = r
            .path_to(Vec2::new(10.5, 10.5), Vec2::new(12.5, 10.5))
            .unwrap()
            .unwrap();
        assert_eq!(path.cost(), 2 * (10 + 40));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn path_to_reports_unreachable_and_out_of_room() {
        let mut r = room();
        for y in 0..5 {
            r.set_impassable(Point::new(2, y));
        }
        assert_eq!(r.path_to(Vec2::new(10.5, 10.5), Vec2::new(14.5, 10.5)), Ok(None));

        let err = r
            .path_to(Vec2::new(0.0, 0.0), Vec2::new(14.5, 10.5))
            .unwrap_err();
        assert!(matches!(err, PathError::StartOutOfBounds { .. }));
    }

    #[test]
    fn target_just_outside_room_is_rejected_not_clamped() {
        let r = room();
        let got = r.path_to(Vec2::new(10.5, 10.5), Vec2::new(15.5, 12.5));
        assert_eq!(
            got,
            Err(PathError::EndOutOfBounds {
                point: Point::new(5, 2),
                bounds: r.bounds()
            })
        );
        assert_eq!(r.nudge_goal(Point::new(5, 2)), None);
        assert_eq!(r.nudge_goal(Point::new(-1, -1)), None);

        let ctx = Context::new();
        let got = r.path_to_with_context(Vec2::new(10.5, 10.5), Vec2::new(12.5, 9.5), &ctx);
        assert!(matches!(got, Err(PathError::EndOutOfBounds { .. })));
    }

    #[test]
    fn negative_penalty_is_rejected() {
        let mut r = room();
        let p = Point::new(1, 1);
        assert!(!r.set_penalty(p, -5));
        assert_eq!(r.penalty(p), 40);
        assert!(r.is_walkable(p));
        assert!(r.set_penalty(p, 0));
        assert!(!r.is_walkable(p));
    }

    #[test]
    fn cancelled_context_yields_cancelled() {
        let r = room();
        let ctx = Context::new();
        ctx.cancel();
        let got = r.path_to_with_context(Vec2::new(10.5, 10.5), Vec2::new(14.5, 14.5), &ctx);
        assert_eq!(got, Ok(SearchOutcome::Cancelled));
    }

    #[test]
    fn room_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Room>();
    }
}
