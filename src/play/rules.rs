use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Engine settings shared by every position of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rules {
    pub legality: Legality,
    /// reaching this many plies ends the game in a draw
    pub ply_limit: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            legality: Legality::default(),
            ply_limit: crate::DEFAULT_PLY_LIMIT,
        }
    }
}

impl Rules {
    pub fn ramified() -> Self {
        Self {
            legality: Legality::Ramified,
            ..Self::default()
        }
    }
    pub fn with_ply_limit(mut self, ply_limit: usize) -> Self {
        self.ply_limit = ply_limit;
        self
    }
}
