use delve_core::Point;

use crate::heap::HeapItem;

/// Per-cell A* search state.
///
/// Nodes live in a [`NodeGrid`](crate::NodeGrid) arena for the duration of
/// one search; `parent` is an index into that arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNode {
    position: Point,
    /// Cost from the start along the best known route.
    pub g_cost: i32,
    /// Octile estimate of the remaining cost to the goal.
    pub h_cost: i32,
    /// Arena index of the node this one was reached from.
    pub parent: Option<usize>,
    heap_index: usize,
}

impl PathNode {
    /// A fresh node with zero costs and no parent.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            g_cost: 0,
            h_cost: 0,
            parent: None,
            heap_index: usize::MAX,
        }
    }

    /// Room-local cell this node stands for.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Total estimated cost through this node, saturating at `i32::MAX`.
    #[inline]
    pub fn f_cost(&self) -> i32 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

impl HeapItem for PathNode {
    /// Lowest total cost first, then lowest heuristic.
    type Key = (i32, i32);

    #[inline]
    fn heap_key(&self) -> (i32, i32) {
        (self.f_cost(), self.h_cost)
    }

    #[inline]
    fn heap_index(&self) -> usize {
        self.heap_index
    }

    #[inline]
    fn set_heap_index(&mut self, index: usize) {
        self.heap_index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f_cost_is_derived() {
        let mut n = PathNode::new(Point::new(2, 3));
        assert_eq!(n.f_cost(), 0);
        n.g_cost = 24;
        n.h_cost = 10;
        assert_eq!(n.f_cost(), 34);
        n.g_cost = 4;
        assert_eq!(n.f_cost(), 14);
    }

    #[test]
    fn key_prefers_lower_heuristic_on_equal_total() {
        let mut near = PathNode::new(Point::new(0, 0));
        near.g_cost = 30;
        near.h_cost = 10;
        let mut far = PathNode::new(Point::new(1, 0));
        far.g_cost = 10;
        far.h_cost = 30;
        assert_eq!(near.f_cost(), far.f_cost());
        assert!(near.heap_key() < far.heap_key());
    }

    #[test]
    fn f_cost_saturates() {
        let mut n = PathNode::new(Point::ZERO);
        n.g_cost = i32::MAX - 3;
        n.h_cost = 56;
        assert_eq!(n.f_cost(), i32::MAX);
    }
}
