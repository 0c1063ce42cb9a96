//! Shared pieces of the command-line demos: config loading, the builtin
//! room, obstacle scattering and map printing.

use std::collections::HashSet;
use std::path::Path as FsPath;

use delve_core::Point;
use delve_paths::Path;
use delve_room::{Layout, Room, RoomConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Room used when no layout file is given.
pub const BUILTIN_LAYOUT: &str = "
####################
#S.....~~~~~.......#
#......~~~~~.......#
#..######..........#
#..#....#...o......#
#..#....#..........#
#..#..======....####
#.....=....=.......#
#.....=.o..=....G..#
####################
";

/// Demo settings read from a TOML file.
///
/// ```toml
/// lower = { x = 100, y = 40 }
///
/// [room]
/// cell_size = 0.5
/// nudge_radius = 2
///
/// [room.search]
/// snapshot = "copy_on_call"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// World cell of the layout's top-left corner.
    pub lower: Point,
    pub room: RoomConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

impl DemoConfig {
    pub fn load(path: &FsPath) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Place up to `count` movable obstacles on random free cells, never on
/// the layout's start or goal. Returns the cells that were blocked.
pub fn scatter_obstacles(
    room: &mut Room,
    layout: &Layout,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<Point> {
    let reserved: HashSet<Point> = [layout.start(), layout.goal()].into_iter().flatten().collect();
    let mut free: Vec<Point> = room
        .bounds()
        .iter()
        .filter(|p| room.is_walkable(*p) && !reserved.contains(p))
        .collect();
    let mut placed = Vec::with_capacity(count.min(free.len()));
    while placed.len() < count && !free.is_empty() {
        let p = free.swap_remove(rng.random_range(0..free.len()));
        room.place_obstacle(p);
        placed.push(p);
    }
    if placed.len() < count {
        log::warn!("only {} free cells for {count} obstacles", placed.len());
    }
    placed
}

/// The layout with obstacles from `room` and the route marked `*`.
pub fn render(layout: &Layout, room: &Room, path: Option<&Path>) -> String {
    let route: HashSet<Point> = path.map(|p| p.cells().collect()).unwrap_or_default();
    let size = layout.size();
    let mut out = String::with_capacity(((size.x + 1) * size.y) as usize);
    for y in 0..size.y {
        for x in 0..size.x {
            let p = Point::new(x, y);
            let ch = if Some(p) == layout.start() {
                'S'
            } else if Some(p) == layout.goal() {
                'G'
            } else if route.contains(&p) {
                '*'
            } else if room.obstacles().at(p) == Some(0) {
                'o'
            } else {
                layout.tile(p).map_or(' ', |t| t.glyph())
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
