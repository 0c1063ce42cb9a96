//! Search options.

/// How a search reads the penalty and obstacle grids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TerrainSnapshot {
    /// Query the lookups lazily as cells are expanded. Requires that nobody
    /// mutates the grids while the search runs.
    #[default]
    ReadThrough,
    /// Copy every cell once before searching, so later mutations of the
    /// source grids cannot be observed mid-search.
    CopyOnCall,
}

/// Options for [`PathFinder`](crate::PathFinder).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Give up with "no path" after expanding this many nodes.
    /// `None` searches until the open set is exhausted.
    pub max_expansions: Option<usize>,
    pub snapshot: TerrainSnapshot,
}

impl SearchConfig {
    /// Same config with an expansion budget.
    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }

    /// Same config with a different snapshot mode.
    pub fn with_snapshot(mut self, snapshot: TerrainSnapshot) -> Self {
        self.snapshot = snapshot;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SearchConfig::default());
    }

    #[test]
    fn snapshot_uses_snake_case() {
        let cfg: SearchConfig =
            serde_json::from_str(r#"{"max_expansions": 64, "snapshot": "copy_on_call"}"#).unwrap();
        assert_eq!(cfg.max_expansions, Some(64));
        assert_eq!(cfg.snapshot, TerrainSnapshot::CopyOnCall);
    }
}
