use super::*;

/// Errors raised while constructing an arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// the requested bounds admit more moves than the ceiling allows
    TooLarge { bound: usize, ceiling: usize },
    /// two moves share an address
    DuplicateAddress(Address),
}

impl std::fmt::Display for ArenaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooLarge { bound, ceiling } => write!(
                f,
                "arena too large: bounds admit {} moves, ceiling is {}; retry with smaller bounds",
                bound, ceiling
            ),
            Self::DuplicateAddress(address) => write!(f, "duplicate address {}", address),
        }
    }
}

impl std::error::Error for ArenaError {}
