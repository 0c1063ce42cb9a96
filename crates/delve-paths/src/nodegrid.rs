use delve_core::{Point, Range};

use crate::node::PathNode;

/// One [`PathNode`] per cell of a room grid, stored row-major.
///
/// A node grid is built for a single search call and dropped with it.
#[derive(Debug, Clone)]
pub struct NodeGrid {
    bounds: Range,
    nodes: Vec<PathNode>,
}

impl NodeGrid {
    /// Allocate a `width` × `height` grid anchored at the origin.
    pub fn create(width: i32, height: i32) -> Self {
        Self::for_bounds(Range::with_size(width, height))
    }

    /// Allocate one node per cell of `bounds`.
    pub fn for_bounds(bounds: Range) -> Self {
        let nodes = bounds.iter().map(PathNode::new).collect();
        Self { bounds, nodes }
    }

    /// The cells covered by this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Arena index of the node at `p`, or `None` outside the grid.
    #[inline]
    pub fn id(&self, p: Point) -> Option<usize> {
        self.bounds.index_of(p)
    }

    /// Node at (x, y), or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&PathNode> {
        self.id(Point::new(x, y)).map(|i| &self.nodes[i])
    }

    /// Mutable node at (x, y), or `None` outside the grid.
    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut PathNode> {
        self.id(Point::new(x, y)).map(move |i| &mut self.nodes[i])
    }

    /// Node by arena index.
    #[inline]
    pub fn node(&self, id: usize) -> &PathNode {
        &self.nodes[id]
    }

    /// All nodes.
    #[inline]
    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    /// All nodes, for handing to the heap as its arena.
    #[inline]
    pub fn nodes_mut(&mut self) -> &mut [PathNode] {
        &mut self.nodes
    }

    /// Arena indices from `end` back to the root of its parent chain.
    pub fn chain(&self, end: usize) -> ParentChain<'_> {
        ParentChain {
            grid: self,
            next: Some(end),
        }
    }
}

/// Iterator walking `parent` links toward the start node.
pub struct ParentChain<'a> {
    grid: &'a NodeGrid,
    next: Option<usize>,
}

impl Iterator for ParentChain<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let cur = self.next?;
        self.next = self.grid.nodes[cur].parent;
        Some(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_indexes_every_cell() {
        let g = NodeGrid::create(4, 3);
        assert_eq!(g.len(), 12);
        for y in 0..3 {
            for x in 0..4 {
                let n = g.get(x, y).expect("cell inside grid");
                assert_eq!(n.position(), Point::new(x, y));
                assert_eq!(n.g_cost, 0);
                assert_eq!(n.h_cost, 0);
                assert_eq!(n.parent, None);
            }
        }
    }

    #[test]
    fn out_of_bounds_is_none_not_a_neighbor() {
        let g = NodeGrid::create(4, 3);
        assert!(g.get(-1, 0).is_none());
        assert!(g.get(0, -1).is_none());
        assert!(g.get(0, 3).is_none());
        // Row-major wrap-around must not alias (4, 0) onto (0, 1).
        assert!(g.get(4, 0).is_none());
        assert_eq!(g.get(0, 1).map(PathNode::position), Some(Point::new(0, 1)));
    }

    #[test]
    fn empty_grid() {
        let g = NodeGrid::create(0, 5);
        assert!(g.is_empty());
        assert!(g.get(0, 0).is_none());
    }

    #[test]
    fn chain_follows_parents() {
        let mut g = NodeGrid::create(3, 1);
        g.get_mut(1, 0).unwrap().parent = Some(0);
        g.get_mut(2, 0).unwrap().parent = Some(1);
        let ids: Vec<usize> = g.chain(2).collect();
        assert_eq!(ids, vec![2, 1, 0]);
    }
}
