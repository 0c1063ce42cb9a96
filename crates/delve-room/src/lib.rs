//! Rooms for grid pathfinding: terrain layers, placement in world space,
//! ASCII layouts and a background search worker.
//!
//! A [`Room`] implements [`TerrainLookup`](delve_paths::TerrainLookup) and
//! [`CellToWorld`](delve_paths::CellToWorld), so it can be handed straight
//! to the search in `delve-paths`. Most callers only need
//! [`Room::path_to`].

mod config;
mod grid;
mod layout;
mod room;
mod worker;

pub use config::RoomConfig;
pub use grid::Grid;
pub use layout::{Layout, LayoutError, Tile};
pub use room::Room;
pub use worker::{PathRequest, PathResponse, PathWorker, Ticket, WorkerError};
