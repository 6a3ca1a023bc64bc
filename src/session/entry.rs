use super::*;
use crate::Millis;
use crate::arena::*;
use serde::Deserialize;
use serde::Serialize;

/// One line of a session's append-only move log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// 1-based ply number
    pub move_number: usize,
    pub player: Player,
    #[serde(rename = "move")]
    pub choice: ArenaMove,
    pub source: Origin,
    pub timestamp: Millis,
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>3}. {} {} ({})",
            self.move_number,
            self.player,
            self.choice.address(),
            self.source
        )
    }
}
