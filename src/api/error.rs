use crate::GameId;
use crate::arena::ArenaError;
use crate::session::SessionError;
use crate::simulation::SimulationError;

/// Anything a request can fail with, ready to show to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Arena(ArenaError),
    Session(SessionError),
    Simulation(SimulationError),
    /// the supplied state belongs to another game
    Mismatch { expected: GameId, found: GameId },
}

impl ApiError {
    /// the request named something that does not exist
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            Self::Session(SessionError::UnknownStrategy(_))
                | Self::Simulation(SimulationError::Seat(SessionError::UnknownStrategy(_)))
        )
    }
}

impl From<ArenaError> for ApiError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}
impl From<SessionError> for ApiError {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}
impl From<SimulationError> for ApiError {
    fn from(e: SimulationError) -> Self {
        Self::Simulation(e)
    }
}
impl From<crate::play::IllegalMove> for ApiError {
    fn from(e: crate::play::IllegalMove) -> Self {
        Self::Session(SessionError::Illegal(e))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arena(e) => write!(f, "{}", e),
            Self::Session(e) => write!(f, "{}", e),
            Self::Simulation(e) => write!(f, "{}", e),
            Self::Mismatch { expected, found } => {
                write!(f, "state belongs to game {}, not {}", found, expected)
            }
        }
    }
}

impl std::error::Error for ApiError {}
