use crate::arena::*;

/// Why a move was refused. Rendered for direct display to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// the game has already ended
    Finished,
    /// the move belongs to the player not on turn
    WrongPlayer { expected: Player, found: Player },
    /// the address was played earlier in this game
    Replayed,
    /// no such move exists in the arena
    Unknown,
    /// the game must open with an initial move
    NotInitial,
    /// the move is not on a branch opened by the previous move
    Unopened,
}

/// A move that failed the engine's checks. The position is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalMove {
    pub address: Address,
    pub reason: Reason,
}

impl IllegalMove {
    pub fn new(address: Address, reason: Reason) -> Self {
        Self { address, reason }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            Reason::Finished => write!(f, "cannot play {}: the game is over", self.address),
            Reason::WrongPlayer { expected, found } => write!(
                f,
                "cannot play {}: it is {}'s turn, not {}'s",
                self.address, expected, found
            ),
            Reason::Replayed => write!(f, "cannot play {}: already played", self.address),
            Reason::Unknown => write!(f, "cannot play {}: no such move in the arena", self.address),
            Reason::NotInitial => write!(f, "cannot play {}: not an opening move", self.address),
            Reason::Unopened => write!(
                f,
                "cannot play {}: not opened by the previous move",
                self.address
            ),
        }
    }
}

impl std::error::Error for IllegalMove {}
