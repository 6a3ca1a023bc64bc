use crate::arena::Player;
use crate::play::Winner;
use serde::Deserialize;
use serde::Serialize;

/// Which seats the arbiter plays on its own.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// every move comes from the caller
    #[default]
    Manual,
    /// P follows its strategy, O is manual
    PStrategy,
    /// O follows its strategy, P is manual
    OStrategy,
    /// both seats are automated, falling back to the AI and then to random play
    Auto,
}

impl Mode {
    pub fn automates(&self, player: Player) -> bool {
        match self {
            Self::Manual => false,
            Self::PStrategy => player == Player::P,
            Self::OStrategy => player == Player::O,
            Self::Auto => true,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::PStrategy => write!(f, "p_strategy"),
            Self::OStrategy => write!(f, "o_strategy"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "manual" => Ok(Self::Manual),
            "p_strategy" => Ok(Self::PStrategy),
            "o_strategy" => Ok(Self::OStrategy),
            "auto" => Ok(Self::Auto),
            other => Err(format!("unknown mode {}", other)),
        }
    }
}

/// Lifecycle of a session. Every status past `Playing` is final.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Setup,
    Playing,
    PWins,
    OWins,
    Draw,
    Abandoned,
}

impl Status {
    pub fn is_over(&self) -> bool {
        !matches!(self, Self::Setup | Self::Playing)
    }
}

impl From<Winner> for Status {
    fn from(winner: Winner) -> Self {
        match winner {
            Winner::P => Self::PWins,
            Winner::O => Self::OWins,
            Winner::Draw => Self::Draw,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Setup => write!(f, "setup"),
            Self::Playing => write!(f, "playing"),
            Self::PWins => write!(f, "p_wins"),
            Self::OWins => write!(f, "o_wins"),
            Self::Draw => write!(f, "draw"),
            Self::Abandoned => write!(f, "abandoned"),
        }
    }
}

/// Where a logged move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Manual,
    Strategy,
    Ai,
    Random,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::Strategy => write!(f, "strategy"),
            Self::Ai => write!(f, "ai"),
            Self::Random => write!(f, "random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_automate_their_seats() {
        assert!(!Mode::Manual.automates(Player::P));
        assert!(Mode::PStrategy.automates(Player::P));
        assert!(!Mode::PStrategy.automates(Player::O));
        assert!(Mode::OStrategy.automates(Player::O));
        assert!(Mode::Auto.automates(Player::O));
    }

    #[test]
    fn wire_names_are_snake_case() {
        assert_eq!(serde_json::to_value(Mode::PStrategy).unwrap(), serde_json::json!("p_strategy"));
        assert_eq!(serde_json::to_value(Status::OWins).unwrap(), serde_json::json!("o_wins"));
        assert_eq!("o-strategy".parse::<Mode>(), Ok(Mode::OStrategy));
        assert_eq!(Status::from(Winner::Draw).to_string(), "draw");
    }

    #[test]
    fn only_live_statuses_accept_moves() {
        assert!(!Status::Setup.is_over());
        assert!(!Status::Playing.is_over());
        assert!(Status::Abandoned.is_over());
        assert!(Status::PWins.is_over());
    }
}
