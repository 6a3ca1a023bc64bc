use crate::ai::Difficulty;
use serde::Deserialize;
use serde::Serialize;

/// How much simulation backs each strategy report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisConfig {
    /// games per fixed opponent
    pub game_count: usize,
    /// strength of the AI opponent
    pub difficulty: Difficulty,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            game_count: crate::DEFAULT_GAME_COUNT,
            difficulty: Difficulty::default(),
        }
    }
}
