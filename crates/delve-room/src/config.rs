use delve_paths::SearchConfig;
use glam::Vec2;

/// Room construction and goal-nudging options.
///
/// All fields have defaults, so a config file only needs to name the
/// values it changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoomConfig {
    /// World units per cell.
    pub cell_size: f32,
    /// World position of the corner of world cell `(0, 0)`.
    pub origin: Vec2,
    /// Penalty of ordinary floor.
    pub default_penalty: i32,
    /// Penalty of paved or otherwise preferred cells.
    pub preferred_penalty: i32,
    /// Penalty of rough ground agents avoid when they can.
    pub rough_penalty: i32,
    /// How many rings around a blocked goal are searched for a free cell.
    pub nudge_radius: i32,
    /// Options for the A* search itself.
    pub search: SearchConfig,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            origin: Vec2::ZERO,
            default_penalty: 40,
            preferred_penalty: 1,
            rough_penalty: 120,
            nudge_radius: 1,
            search: SearchConfig::default(),
        }
    }
}
