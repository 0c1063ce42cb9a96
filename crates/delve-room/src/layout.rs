//! Rooms drawn as ASCII art.
//!
//! | glyph | meaning |
//! |---|---|
//! | `#` | wall |
//! | `.` | floor (default penalty) |
//! | `=` | preferred path (low penalty) |
//! | `~` | rough ground (high penalty) |
//! | `o` | movable obstacle on floor |
//! | `S` | start marker on floor |
//! | `G` | goal marker on floor |
//!
//! Lines are separated by `'\n'` and must all have the same width.
//! Leading and trailing blank space around the whole text is ignored.

use std::fmt;
use std::str::FromStr;

use delve_core::Point;
use thiserror::Error;

use crate::config::RoomConfig;
use crate::room::Room;

/// Terrain kind of one layout cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Floor,
    Preferred,
    Rough,
    Obstacle,
}

impl Tile {
    /// Glyph used when printing the tile back out.
    pub fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Preferred => '=',
            Tile::Rough => '~',
            Tile::Obstacle => 'o',
        }
    }
}

/// Errors from [`Layout::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,
    #[error("line {line} is {found} cells wide, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown glyph {glyph:?} at {pos}")]
    UnknownGlyph { glyph: char, pos: Point },
    #[error("second {glyph:?} marker at {pos}")]
    DuplicateMarker { glyph: char, pos: Point },
}

/// A parsed ASCII room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    size: Point,
    tiles: Vec<Tile>,
    start: Option<Point>,
    goal: Option<Point>,
}

impl Layout {
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LayoutError::Empty);
        }
        let mut tiles = Vec::with_capacity(s.len());
        let mut start = None;
        let mut goal = None;
        let mut width = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let mut found = 0;
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let tile = match ch {
                    '#' => Tile::Wall,
                    '.' => Tile::Floor,
                    '=' => Tile::Preferred,
                    '~' => Tile::Rough,
                    'o' => Tile::Obstacle,
                    'S' | 'G' => {
                        let slot = if ch == 'S' { &mut start } else { &mut goal };
                        if slot.is_some() {
                            return Err(LayoutError::DuplicateMarker { glyph: ch, pos });
                        }
                        *slot = Some(pos);
                        Tile::Floor
                    }
                    _ => return Err(LayoutError::UnknownGlyph { glyph: ch, pos }),
                };
                tiles.push(tile);
                found += 1;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(LayoutError::InconsistentWidth {
                        line: y,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        Ok(Self {
            size: Point::new(width as i32, height),
            tiles,
            start,
            goal,
        })
    }

    /// Width and height in cells.
    pub fn size(&self) -> Point {
        self.size
    }

    /// Position of the `S` marker.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the `G` marker.
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Tile at a layout position, or `None` outside the layout.
    pub fn tile(&self, p: Point) -> Option<Tile> {
        if p.x < 0 || p.y < 0 || p.x >= self.size.x || p.y >= self.size.y {
            return None;
        }
        Some(self.tiles[(p.y * self.size.x + p.x) as usize])
    }

    /// `(Point, Tile)` pairs in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        let w = self.size.x.max(1);
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &t)| (Point::new(i as i32 % w, i as i32 / w), t))
    }

    /// Build a room whose lower world cell is `lower`, one room cell per
    /// layout cell.
    pub fn to_room(&self, lower: Point, config: RoomConfig) -> Room {
        let upper = lower + self.size - Point::new(1, 1);
        let (preferred, rough) = (config.preferred_penalty, config.rough_penalty);
        let mut room = Room::with_config(lower, upper, config);
        for (p, tile) in self.tiles() {
            match tile {
                Tile::Wall => {
                    room.set_impassable(p);
                }
                Tile::Preferred => {
                    room.set_penalty(p, preferred);
                }
                Tile::Rough => {
                    room.set_penalty(p, rough);
                }
                Tile::Obstacle => {
                    room.place_obstacle(p);
                }
                Tile::Floor => {}
            }
        }
        room
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, LayoutError> {
        Self::parse(s)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size.y {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.size.x {
                let p = Point::new(x, y);
                let ch = if Some(p) == self.start {
                    'S'
                } else if Some(p) == self.goal {
                    'G'
                } else {
                    self.tile(p).map_or(' ', Tile::glyph)
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
