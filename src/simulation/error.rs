use crate::arena::Player;
use crate::play::IllegalMove;
use crate::session::SessionError;

/// Why a simulated game could not be played out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// simulations have nobody to wait on
    ManualSeat(Player),
    /// a seat names a strategy the game lacks or that plays the other side
    Seat(SessionError),
    /// the engine refused a proposed move
    Illegal(IllegalMove),
}

impl From<SessionError> for SimulationError {
    fn from(e: SessionError) -> Self {
        Self::Seat(e)
    }
}

impl From<IllegalMove> for SimulationError {
    fn from(e: IllegalMove) -> Self {
        Self::Illegal(e)
    }
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ManualSeat(player) => write!(f, "{} cannot be manual in a simulation", player),
            Self::Seat(e) => write!(f, "{}", e),
            Self::Illegal(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SimulationError {}
