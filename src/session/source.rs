use super::*;
use crate::StrategyId;
use crate::ai::*;
use crate::arena::*;
use crate::play::*;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Deserialize;
use serde::Serialize;

/// Where a seat's moves come from.
///
/// Parsed from `manual`, `random`, `ai`, `ai:<difficulty>`, or a strategy id
/// (optionally written `strategy:<id>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Source {
    Manual,
    Strategy(StrategyId),
    Ai(Difficulty),
    Random,
}

impl Source {
    pub fn origin(&self) -> Origin {
        match self {
            Self::Manual => Origin::Manual,
            Self::Strategy(_) => Origin::Strategy,
            Self::Ai(_) => Origin::Ai,
            Self::Random => Origin::Random,
        }
    }
    /// this source's own move, with no fallback; manual seats never propose
    pub fn propose<R: Rng>(&self, game: &Game, position: &Position, rng: &mut R) -> Option<ArenaMove> {
        let engine = game.engine();
        match self {
            Self::Manual => None,
            Self::Strategy(id) => game
                .strategies()
                .get(id)
                .and_then(|s| s.play(engine.arena(), position))
                .filter(|m| engine.is_allowed(position, m))
                .cloned(),
            Self::Ai(difficulty) => Selector::new(engine, *difficulty)
                .suggest_with(position, rng)
                .map(|s| s.choice),
            Self::Random => engine.legal(position).choose(rng).map(|m| (*m).clone()),
        }
    }
}

impl std::str::FromStr for Source {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(':') {
            Some(("ai", difficulty)) => difficulty.parse().map(Self::Ai),
            Some(("strategy", id)) if !id.is_empty() => Ok(Self::Strategy(id.to_string())),
            _ => match s {
                "" => Err("empty move source".to_string()),
                "manual" => Ok(Self::Manual),
                "random" => Ok(Self::Random),
                "ai" => Ok(Self::Ai(Difficulty::default())),
                id => Ok(Self::Strategy(id.to_string())),
            },
        }
    }
}

impl TryFrom<String> for Source {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Source> for String {
    fn from(source: Source) -> Self {
        source.to_string()
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::Strategy(id) => write!(f, "{}", id),
            Self::Ai(difficulty) => write!(f, "ai:{}", difficulty),
            Self::Random => write!(f, "random"),
        }
    }
}
