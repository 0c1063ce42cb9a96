//! **delve-core** — shared primitives for the delve pathfinding crates.
//!
//! This crate provides the integer cell geometry ([`Point`], [`Range`])
//! used to address room grids, and the [`Context`] cancellation token
//! polled by long-running searches.

pub mod context;
pub mod geom;

pub use context::Context;
pub use geom::{Point, Range, RangeIter};
