use super::*;
use crate::arena::*;
use serde::Deserialize;
use serde::Serialize;

/// How strictly candidate moves must follow the tree.
///
/// Both rules require the move to belong to the player on turn and not to
/// have been played, and only initial moves may open the game. `Ramified`
/// additionally requires the move to sit on a branch opened by the
/// immediately preceding move; it rejects a superset of what `Permissive`
/// rejects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Legality {
    #[default]
    Permissive,
    Ramified,
}

impl Legality {
    /// rule-specific admission; turn ownership and repetition are checked by the engine
    pub fn admits(&self, position: &Position, candidate: &ArenaMove) -> bool {
        match position.last() {
            None => candidate.is_initial(),
            Some(last) => match self {
                Self::Permissive => true,
                Self::Ramified => last.opens(candidate.address()),
            },
        }
    }
}

impl std::fmt::Display for Legality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Permissive => write!(f, "permissive"),
            Self::Ramified => write!(f, "ramified"),
        }
    }
}

impl std::str::FromStr for Legality {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "ramified" => Ok(Self::Ramified),
            _ => Err("legality must be permissive or ramified"),
        }
    }
}
