use crate::ai::Suggestion;
use crate::arena::ArenaMove;
use crate::play::Position;
use crate::session::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResponse {
    pub position: Position,
    pub available_moves: Vec<ArenaMove>,
    pub state: GamePlayState,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub position: Position,
    pub available_moves: Vec<ArenaMove>,
    pub is_game_over: bool,
    pub status: Status,
    /// moves the call applied, the caller's own first
    pub applied: Vec<LogEntry>,
    pub state: GamePlayState,
}

#[derive(Debug, Clone, Serialize)]
pub struct AiMoveResponse {
    /// absent when the player on turn has no legal move
    pub suggestion: Option<Suggestion>,
}
