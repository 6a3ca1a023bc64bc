use crate::play::Winner;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;

/// Outcome of one automated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub winner: Winner,
    /// plies played
    pub moves: usize,
    /// wall-clock time spent playing
    pub duration: Duration,
}

impl std::fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "winner {} after {} moves in {:?}",
            self.winner, self.moves, self.duration
        )
    }
}
