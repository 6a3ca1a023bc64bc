use crate::Score;
use crate::arena::ArenaMove;
use serde::Deserialize;
use serde::Serialize;

/// A ranked move with enough context to show a player without further work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "move")]
    pub choice: ArenaMove,
    /// evaluation from the mover's point of view; positive favours the mover
    pub score: Score,
    pub reason: String,
    /// plies searched below the suggested move
    pub depth: usize,
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:+.3}): {}", self.choice.address(), self.score, self.reason)
    }
}
