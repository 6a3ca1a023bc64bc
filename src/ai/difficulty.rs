use serde::Deserialize;
use serde::Serialize;

/// How hard the selector looks before it answers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// one ply of lookahead plus bounded noise
    Easy,
    #[default]
    Medium,
    /// search towards the end of the game within a node budget
    Hard,
}

impl Difficulty {
    /// plies searched from a position that has `remaining` plies left before the limit
    pub fn lookahead(&self, remaining: usize) -> usize {
        match self {
            Self::Easy => crate::EASY_LOOKAHEAD.min(remaining),
            Self::Medium => crate::MEDIUM_LOOKAHEAD.min(remaining),
            Self::Hard => crate::HARD_LOOKAHEAD.min(remaining),
        }
    }
    pub fn all() -> [Self; 3] {
        [Self::Easy, Self::Medium, Self::Hard]
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!("unknown difficulty {}", other)),
        }
    }
}
