use super::*;
use crate::arena::*;

/// A strategy that does not fit its arena or its seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// a response names a move owned by the other player
    Foreign(Address),
    /// a response names an address the arena lacks, or the wrong ramification
    Missing(Address),
    /// a key describes a position where the strategy's player is not on turn
    OutOfTurn(Key),
}

impl std::fmt::Display for StrategyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Foreign(address) => write!(f, "response {} belongs to the other player", address),
            Self::Missing(address) => write!(f, "response {} is not a move of this arena", address),
            Self::OutOfTurn(key) => write!(f, "position {} is not this player's turn", key),
        }
    }
}

impl std::error::Error for StrategyError {}
