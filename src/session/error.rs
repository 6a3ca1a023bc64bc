use super::*;
use crate::StrategyId;
use crate::arena::Player;
use crate::play::IllegalMove;
use crate::strategy::StrategyError;

/// Why a session refused a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Illegal(IllegalMove),
    /// the session has already ended with this status
    Finished(Status),
    /// a manual move was offered for a seat the arbiter controls
    Automated(Player),
    UnknownStrategy(StrategyId),
    /// the strategy belongs to the other seat
    WrongSeat { strategy: StrategyId, player: Player },
    /// the mode needs a strategy for this seat and none was given
    Unassigned(Player),
    /// the strategy was written for another game
    WrongGame(StrategyId),
    Strategy(StrategyError),
    NothingToUndo,
    /// a restored state whose log, position and status disagree
    Inconsistent,
}

impl From<IllegalMove> for SessionError {
    fn from(e: IllegalMove) -> Self {
        Self::Illegal(e)
    }
}

impl From<StrategyError> for SessionError {
    fn from(e: StrategyError) -> Self {
        Self::Strategy(e)
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Illegal(e) => write!(f, "{}", e),
            Self::Finished(status) => write!(f, "game is over ({})", status),
            Self::Automated(player) => write!(f, "{} is played automatically", player),
            Self::UnknownStrategy(id) => write!(f, "unknown strategy {}", id),
            Self::WrongSeat { strategy, player } => {
                write!(f, "strategy {} does not play {}", strategy, player)
            }
            Self::Unassigned(player) => write!(f, "no strategy assigned to {}", player),
            Self::WrongGame(id) => write!(f, "strategy {} belongs to another game", id),
            Self::Strategy(e) => write!(f, "invalid strategy: {}", e),
            Self::NothingToUndo => write!(f, "no moves to undo"),
            Self::Inconsistent => write!(f, "state does not match its move log"),
        }
    }
}

impl std::error::Error for SessionError {}
