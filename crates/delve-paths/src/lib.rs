//! Grid A* pathfinding for agents moving inside a single room.
//!
//! The search runs over room-local cells with 8-way movement and integer
//! octile costs (10 per orthogonal step, 14 per diagonal step), plus a
//! per-cell movement penalty supplied by the room:
//!
//! - [`PriorityHeap`]: indexed binary min-heap with O(log n) decrease-key
//! - [`NodeGrid`] / [`PathNode`]: per-call node arena, one node per cell
//! - [`PathFinder`] / [`build_path`]: the search and path reconstruction
//! - [`RoomFrame`]: room-local ↔ world coordinate conversion
//!
//! # Traits
//!
//! | Trait | Supplies |
//! |---|---|
//! | [`TerrainLookup`] | movement penalty and dynamic obstacle per cell |
//! | [`CellToWorld`] | world position of a cell center |
//! | [`HeapItem`] | ordering key and slot storage for [`PriorityHeap`] |

mod config;
mod distance;
mod error;
mod heap;
mod neighbors;
mod node;
mod nodegrid;
mod path;
mod search;
mod traits;
mod transform;

pub use config::{SearchConfig, TerrainSnapshot};
pub use distance::{DIAGONAL_COST, STRAIGHT_COST, octile};
pub use error::PathError;
pub use heap::{HeapItem, PriorityHeap};
pub use neighbors::{Neighbors, OFFSETS_8};
pub use node::PathNode;
pub use nodegrid::{NodeGrid, ParentChain};
pub use path::Path;
pub use search::{PathFinder, SearchOutcome, build_path};
pub use traits::{CellToWorld, TerrainFn, TerrainLookup};
pub use transform::RoomFrame;
