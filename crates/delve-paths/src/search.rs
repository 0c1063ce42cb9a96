use delve_core::{Context, Point, Range};
use log::debug;

use crate::config::{SearchConfig, TerrainSnapshot};
use crate::distance::octile;
use crate::error::PathError;
use crate::heap::PriorityHeap;
use crate::neighbors::Neighbors;
use crate::node::PathNode;
use crate::nodegrid::NodeGrid;
use crate::path::Path;
use crate::traits::{CellToWorld, TerrainLookup};

/// Result of a cancellable search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The cheapest route from start to goal.
    Found(Path),
    /// The goal is unreachable from the start (or the expansion budget ran
    /// out first).
    NoPath,
    /// The context was cancelled before the search finished.
    Cancelled,
}

impl SearchOutcome {
    /// The path, if one was found.
    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath | Self::Cancelled => None,
        }
    }
}

/// A* over a room's cell grid with octile movement costs.
///
/// Every call allocates its own node grid, open heap and closed set, so a
/// single `PathFinder` can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    config: SearchConfig,
}

impl PathFinder {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find the cheapest route from `start` to `end`.
    ///
    /// Both cells are room-local and must lie inside `bounds`. Returns
    /// `Ok(None)` when the goal cannot be reached.
    pub fn build_path<T, W>(
        &self,
        bounds: Range,
        start: Point,
        end: Point,
        terrain: &T,
        world: &W,
    ) -> Result<Option<Path>, PathError>
    where
        T: TerrainLookup + ?Sized,
        W: CellToWorld + ?Sized,
    {
        self.search(bounds, start, end, terrain, world, None)
            .map(SearchOutcome::into_path)
    }

    /// Like [`build_path`](Self::build_path), polling `ctx` once per
    /// expanded node.
    pub fn build_path_with_context<T, W>(
        &self,
        bounds: Range,
        start: Point,
        end: Point,
        terrain: &T,
        world: &W,
        ctx: &Context,
    ) -> Result<SearchOutcome, PathError>
    where
        T: TerrainLookup + ?Sized,
        W: CellToWorld + ?Sized,
    {
        self.search(bounds, start, end, terrain, world, Some(ctx))
    }

    fn search<T, W>(
        &self,
        bounds: Range,
        start: Point,
        end: Point,
        terrain: &T,
        world: &W,
        ctx: Option<&Context>,
    ) -> Result<SearchOutcome, PathError>
    where
        T: TerrainLookup + ?Sized,
        W: CellToWorld + ?Sized,
    {
        if !bounds.contains(start) {
            return Err(PathError::StartOutOfBounds {
                point: start,
                bounds,
            });
        }
        if !bounds.contains(end) {
            return Err(PathError::EndOutOfBounds { point: end, bounds });
        }

        let outcome = match self.config.snapshot {
            TerrainSnapshot::ReadThrough => self.run(bounds, start, end, terrain, world, ctx),
            TerrainSnapshot::CopyOnCall => {
                let copy = TerrainCopy::capture(bounds, terrain);
                self.run(bounds, start, end, &copy, world, ctx)
            }
        };
        Ok(outcome)
    }

    fn run<T, W>(
        &self,
        bounds: Range,
        start: Point,
        end: Point,
        terrain: &T,
        world: &W,
        ctx: Option<&Context>,
    ) -> SearchOutcome
    where
        T: TerrainLookup + ?Sized,
        W: CellToWorld + ?Sized,
    {
        let mut grid = NodeGrid::for_bounds(bounds);
        let (Some(start_id), Some(end_id)) = (grid.id(start), grid.id(end)) else {
            return SearchOutcome::NoPath;
        };
        if !terrain.is_walkable(end) {
            debug!("goal {end} is not walkable; expecting no path");
        }

        let mut open: PriorityHeap<PathNode> = PriorityHeap::with_capacity(grid.len());
        let mut closed = vec![false; grid.len()];
        let mut nbuf = Neighbors::new();
        let mut expanded = 0usize;

        {
            let n = &mut grid.nodes_mut()[start_id];
            n.g_cost = 0;
            n.h_cost = octile(start, end);
        }
        open.insert(start_id, grid.nodes_mut());

        while !open.is_empty() {
            if ctx.is_some_and(Context::is_done) {
                debug!("path {start} -> {end}: cancelled after {expanded} expansions");
                return SearchOutcome::Cancelled;
            }

            let current = open.extract_best(grid.nodes_mut());
            if current == end_id {
                let path = reconstruct(&grid, end_id, world);
                debug!(
                    "path {start} -> {end}: {} cells, cost {}, {expanded} expansions",
                    path.len(),
                    path.cost()
                );
                return SearchOutcome::Found(path);
            }
            if self
                .config
                .max_expansions
                .is_some_and(|max| expanded >= max)
            {
                debug!("path {start} -> {end}: expansion budget of {expanded} spent");
                return SearchOutcome::NoPath;
            }

            closed[current] = true;
            expanded += 1;

            let cur = grid.node(current);
            let (cur_pos, cur_g) = (cur.position(), cur.g_cost);

            for &np in nbuf.all(cur_pos, |p| bounds.contains(p)) {
                let Some(ni) = grid.id(np) else {
                    continue;
                };
                if closed[ni] {
                    continue;
                }
                let penalty = terrain.penalty(np);
                if penalty == 0 || terrain.obstacle(np) == 0 {
                    continue;
                }

                // Saturates so huge penalties cap the cost instead of
                // wrapping below cheaper routes.
                let tentative = cur_g
                    .saturating_add(octile(cur_pos, np))
                    .saturating_add(penalty);
                let in_open = open.contains(ni, grid.nodes());
                let n = &mut grid.nodes_mut()[ni];
                if tentative < n.g_cost || !in_open {
                    n.g_cost = tentative;
                    n.h_cost = octile(np, end);
                    n.parent = Some(current);
                    if in_open {
                        open.reposition(ni, grid.nodes_mut());
                    } else {
                        open.insert(ni, grid.nodes_mut());
                    }
                }
            }
        }

        debug!("path {start} -> {end}: no path after {expanded} expansions");
        SearchOutcome::NoPath
    }
}

/// Find a route with the default [`SearchConfig`].
///
/// See [`PathFinder::build_path`].
pub fn build_path<T, W>(
    bounds: Range,
    start: Point,
    end: Point,
    terrain: &T,
    world: &W,
) -> Result<Option<Path>, PathError>
where
    T: TerrainLookup + ?Sized,
    W: CellToWorld + ?Sized,
{
    PathFinder::default().build_path(bounds, start, end, terrain, world)
}

/// Walk parents from the goal back to the start, stacking world positions
/// so that the start ends up on top.
fn reconstruct<W: CellToWorld + ?Sized>(grid: &NodeGrid, end_id: usize, world: &W) -> Path {
    let mut cells = Vec::new();
    let mut stack = Vec::new();
    for id in grid.chain(end_id) {
        let p = grid.node(id).position();
        cells.push(p);
        stack.push(world.cell_to_world(p));
    }
    Path::from_goal_first(cells, stack, grid.node(end_id).g_cost)
}

/// Penalty and obstacle values copied out of a lookup for one search.
struct TerrainCopy {
    bounds: Range,
    cells: Vec<(i32, i32)>,
}

impl TerrainCopy {
    fn capture<T: TerrainLookup + ?Sized>(bounds: Range, terrain: &T) -> Self {
        let cells = bounds
            .iter()
            .map(|p| (terrain.penalty(p), terrain.obstacle(p)))
            .collect();
        Self { bounds, cells }
    }
}

impl TerrainLookup for TerrainCopy {
    fn penalty(&self, p: Point) -> i32 {
        self.bounds.index_of(p).map_or(0, |i| self.cells[i].0)
    }

    fn obstacle(&self, p: Point) -> i32 {
        self.bounds.index_of(p).map_or(0, |i| self.cells[i].1)
    }
}
