use serde::Deserialize;
use serde::Serialize;

/// One of the two participants. Proponent always opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    P,
    O,
}

impl Player {
    pub fn other(&self) -> Self {
        match self {
            Self::P => Self::O,
            Self::O => Self::P,
        }
    }
    /// seat index, P = 0 and O = 1
    pub fn index(&self) -> usize {
        match self {
            Self::P => 0,
            Self::O => 1,
        }
    }
    pub fn all() -> [Self; 2] {
        [Self::P, Self::O]
    }
    /// the player who owns the move at the given ply (0-indexed)
    pub fn at(ply: usize) -> Self {
        match ply % 2 {
            0 => Self::P,
            _ => Self::O,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P => write!(f, "P"),
            Self::O => write!(f, "O"),
        }
    }
}

impl TryFrom<&str> for Player {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "P" | "p" => Ok(Self::P),
            "O" | "o" => Ok(Self::O),
            _ => Err("player must be P or O"),
        }
    }
}

impl std::str::FromStr for Player {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_involution() {
        for player in Player::all() {
            assert_ne!(player, player.other());
            assert_eq!(player, player.other().other());
        }
    }

    #[test]
    fn plies_alternate_from_proponent() {
        assert_eq!(Player::at(0), Player::P);
        assert_eq!(Player::at(1), Player::O);
        assert_eq!(Player::at(6), Player::P);
    }

    #[test]
    fn parse_display_agree() {
        for player in Player::all() {
            assert_eq!(Player::try_from(player.to_string().as_str()), Ok(player));
        }
        assert!(Player::try_from("X").is_err());
    }
}
