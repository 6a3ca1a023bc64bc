use crate::arena::Player;
use serde::Deserialize;
use serde::Serialize;

/// Final result of a game. A player who cannot move loses; the ply limit draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    P,
    O,
    #[serde(rename = "draw")]
    Draw,
}

impl Winner {
    pub fn player(&self) -> Option<Player> {
        match self {
            Self::P => Some(Player::P),
            Self::O => Some(Player::O),
            Self::Draw => None,
        }
    }
}

impl From<Player> for Winner {
    fn from(player: Player) -> Self {
        match player {
            Player::P => Self::P,
            Player::O => Self::O,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P => write!(f, "P"),
            Self::O => write!(f, "O"),
            Self::Draw => write!(f, "draw"),
        }
    }
}
