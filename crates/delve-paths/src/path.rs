use delve_core::Point;
use glam::Vec2;

/// A found route, stored as a stack of waypoints.
///
/// [`pop`](Self::pop) yields waypoints in travel order, starting with the
/// agent's own cell. Movement code usually discards that first waypoint
/// (see [`skip_start`](Self::skip_start)) and then pops one target at a
/// time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// World positions, goal at the bottom, next waypoint on top.
    stack: Vec<Vec2>,
    /// Room-local cells in the same order as `stack`.
    cells: Vec<Point>,
    cost: i32,
}

impl Path {
    /// Build a path from waypoints listed goal first, as produced by a
    /// parent-chain walk.
    pub(crate) fn from_goal_first(cells: Vec<Point>, stack: Vec<Vec2>, cost: i32) -> Self {
        debug_assert_eq!(cells.len(), stack.len());
        Self { stack, cells, cost }
    }

    /// Remove and return the next waypoint.
    pub fn pop(&mut self) -> Option<Vec2> {
        self.cells.pop();
        self.stack.pop()
    }

    /// Next waypoint without removing it.
    pub fn peek(&self) -> Option<Vec2> {
        self.stack.last().copied()
    }

    /// Drop the waypoint for the cell the agent already stands on.
    pub fn skip_start(mut self) -> Self {
        self.pop();
        self
    }

    /// Remaining waypoints.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Search cost of the whole route (geometric distance plus penalties),
    /// saturating at `i32::MAX`.
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Remaining waypoints in travel order.
    pub fn waypoints(&self) -> impl DoubleEndedIterator<Item = Vec2> + '_ {
        self.stack.iter().rev().copied()
    }

    /// Room-local cells of the remaining waypoints in travel order.
    pub fn cells(&self) -> impl DoubleEndedIterator<Item = Point> + '_ {
        self.cells.iter().rev().copied()
    }

    /// Final waypoint (the goal cell's world position).
    pub fn destination(&self) -> Option<Vec2> {
        self.stack.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Path {
        let cells = vec![Point::new(2, 0), Point::new(1, 0), Point::new(0, 0)];
        let stack = cells
            .iter()
            .map(|c| Vec2::new(c.x as f32 + 0.5, 0.5))
            .collect();
        Path::from_goal_first(cells, stack, 20)
    }

    #[test]
    fn pops_in_travel_order() {
        let mut p = sample();
        assert_eq!(p.pop(), Some(Vec2::new(0.5, 0.5)));
        assert_eq!(p.pop(), Some(Vec2::new(1.5, 0.5)));
        assert_eq!(p.pop(), Some(Vec2::new(2.5, 0.5)));
        assert_eq!(p.pop(), None);
        assert!(p.is_empty());
    }

    #[test]
    fn skip_start_keeps_destination() {
        let p = sample().skip_start();
        assert_eq!(p.len(), 2);
        assert_eq!(p.peek(), Some(Vec2::new(1.5, 0.5)));
        assert_eq!(p.destination(), Some(Vec2::new(2.5, 0.5)));
        assert_eq!(p.cells().collect::<Vec<_>>(), vec![Point::new(1, 0), Point::new(2, 0)]);
        assert_eq!(p.cost(), 20);
    }
}
