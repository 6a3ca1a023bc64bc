use crate::GameId;
use crate::StrategyId;
use crate::ai::Difficulty;
use crate::analysis::AnalysisConfig;
use crate::arena::*;
use crate::play::Rules;
use crate::session::*;
use crate::strategy::Strategy;
use serde::Deserialize;
use serde::Serialize;

/// Names a game and everything needed to rebuild its arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRef {
    pub game_id: GameId,
    #[serde(default)]
    pub arena_config: ArenaConfig,
    #[serde(default)]
    pub rules: Rules,
}

impl GameRef {
    pub fn new(game_id: impl Into<GameId>, arena_config: ArenaConfig, rules: Rules) -> Self {
        Self {
            game_id: game_id.into(),
            arena_config,
            rules,
        }
    }
}

fn game_count() -> usize {
    crate::DEFAULT_GAME_COUNT
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(flatten)]
    pub game: GameRef,
    pub strategy: Strategy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeRequest {
    #[serde(flatten)]
    pub game: GameRef,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub p_strategy_id: Option<StrategyId>,
    #[serde(default)]
    pub o_strategy_id: Option<StrategyId>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    #[serde(flatten)]
    pub game: GameRef,
    #[serde(rename = "move")]
    pub address: Address,
    /// the state returned by the previous call
    pub state: GamePlayState,
}

/// Advance automated seats without a manual move.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRequest {
    #[serde(flatten)]
    pub game: GameRef,
    pub state: GamePlayState,
    /// keep going until a manual seat is on turn or the game ends
    #[serde(default)]
    pub to_end: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiMoveRequest {
    #[serde(flatten)]
    pub game: GameRef,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub state: GamePlayState,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateRequest {
    #[serde(flatten)]
    pub game: GameRef,
    pub p_source: Source,
    pub o_source: Source,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    #[serde(flatten)]
    pub game: GameRef,
    pub p_source: Source,
    pub o_source: Source,
    #[serde(default = "game_count")]
    pub game_count: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRequest {
    #[serde(flatten)]
    pub game: GameRef,
    #[serde(default = "game_count")]
    pub game_count: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeStrategyRequest {
    #[serde(flatten)]
    pub game: GameRef,
    pub strategy_id: StrategyId,
    #[serde(default)]
    pub config: AnalysisConfig,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeArenaRequest {
    #[serde(default)]
    pub arena_config: ArenaConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindBestRequest {
    #[serde(flatten)]
    pub game: GameRef,
    pub player: Player,
    #[serde(default)]
    pub config: AnalysisConfig,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_fields_sit_beside_the_payload() {
        let json = r#"{"gameId":"g","arenaConfig":{"maxDepth":2},"pSource":"random","oSource":"ai:hard"}"#;
        let request = serde_json::from_str::<BatchRequest>(json).unwrap();
        assert_eq!(request.game.game_id, "g");
        assert_eq!(request.game.arena_config.max_depth, 2);
        assert_eq!(request.game.rules, Rules::default());
        assert_eq!(request.o_source, Source::Ai(Difficulty::Hard));
        assert_eq!(request.game_count, crate::DEFAULT_GAME_COUNT);
        assert_eq!(request.seed, None);
    }

    #[test]
    fn moves_are_named_by_address() {
        let json = r#"{"gameId":"g","move":"0.1","state":{
            "gameId":"g","currentPosition":{"sequence":[],"isTerminal":false},
            "mode":"manual","status":"setup","moveLog":[],"startedAt":0}}"#;
        let request = serde_json::from_str::<MoveRequest>(json).unwrap();
        assert_eq!(request.address, Address::from("0.1"));
        assert_eq!(request.state.status, Status::Setup);
    }
}
