use super::*;
use crate::GameId;
use crate::Millis;
use crate::StrategyId;
use crate::arena::*;
use crate::play::*;
use serde::Deserialize;
use serde::Serialize;

/// Everything a running session carries between requests.
///
/// Serializes as the `currentStateRef` callers hand back on every move.
/// The log is append-only except through [`GamePlayState::undo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePlayState {
    pub game_id: GameId,
    pub current_position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p_strategy_id: Option<StrategyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o_strategy_id: Option<StrategyId>,
    pub mode: Mode,
    pub status: Status,
    #[serde(default)]
    pub move_log: Vec<LogEntry>,
    pub started_at: Millis,
}

impl GamePlayState {
    pub fn new(
        game_id: GameId,
        mode: Mode,
        p_strategy_id: Option<StrategyId>,
        o_strategy_id: Option<StrategyId>,
        root: Position,
    ) -> Self {
        Self {
            game_id,
            current_position: root,
            p_strategy_id,
            o_strategy_id,
            mode,
            status: Status::Setup,
            move_log: Vec::new(),
            started_at: crate::now(),
        }
    }
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }
    /// the strategy assigned to `player`, if any
    pub fn seat(&self, player: Player) -> Option<&StrategyId> {
        match player {
            Player::P => self.p_strategy_id.as_ref(),
            Player::O => self.o_strategy_id.as_ref(),
        }
    }

    /// play `m` for the player on turn and log it
    pub fn apply(
        &mut self,
        engine: &Engine,
        m: &ArenaMove,
        source: Origin,
    ) -> Result<LogEntry, SessionError> {
        if self.is_over() {
            return Err(SessionError::Finished(self.status));
        }
        let position = engine.apply(&self.current_position, m)?;
        let entry = LogEntry {
            move_number: self.move_log.len() + 1,
            player: m.player(),
            choice: m.clone(),
            source,
            timestamp: crate::now(),
        };
        log::debug!("[session] {} {}", self.game_id, entry);
        self.current_position = position;
        self.move_log.push(entry.clone());
        self.status = Status::Playing;
        self.settle(engine);
        Ok(entry)
    }
    /// record the final status once the position is decided
    pub fn settle(&mut self, engine: &Engine) -> Option<Status> {
        if self.is_over() {
            return Some(self.status);
        }
        engine.verdict(&self.current_position).map(|winner| {
            self.status = Status::from(winner);
            log::info!("[session] {} ends {}", self.game_id, self.status);
            self.status
        })
    }
    /// the player on turn could not move and loses
    pub fn forfeit(&mut self, player: Player) {
        self.status = Status::from(Winner::from(player.other()));
        log::warn!("[session] {} stuck, {} forfeits", self.game_id, player);
    }
    pub fn abandon(&mut self) -> Result<(), SessionError> {
        if self.is_over() {
            return Err(SessionError::Finished(self.status));
        }
        self.status = Status::Abandoned;
        Ok(())
    }
    /// a fresh session over the same game, seats and mode
    pub fn reset(&self, engine: &Engine) -> Self {
        Self::new(
            self.game_id.clone(),
            self.mode,
            self.p_strategy_id.clone(),
            self.o_strategy_id.clone(),
            engine.root(),
        )
    }
    /// take back the last logged move; the session is live again afterwards
    pub fn undo(&mut self, engine: &Engine) -> Result<LogEntry, SessionError> {
        let entry = self.move_log.pop().ok_or(SessionError::NothingToUndo)?;
        let addresses = self
            .move_log
            .iter()
            .map(|e| e.choice.address().clone())
            .collect::<Vec<_>>();
        match engine.restore(&addresses) {
            Ok(position) => {
                self.current_position = position;
                self.status = Status::Playing;
                Ok(entry)
            }
            Err(e) => {
                self.move_log.push(entry);
                Err(SessionError::from(e))
            }
        }
    }
    /// replay a caller-supplied state through the engine before trusting it
    pub fn revalidate(&mut self, engine: &Engine) -> Result<(), SessionError> {
        let addresses = self.current_position.addresses();
        if self
            .move_log
            .iter()
            .map(|e| e.choice.address())
            .ne(addresses.iter())
        {
            return Err(SessionError::Inconsistent);
        }
        self.current_position = engine.restore(&addresses)?;
        match (self.status, engine.verdict(&self.current_position)) {
            (Status::Abandoned, _) => Ok(()),
            (_, Some(winner)) => {
                self.status = Status::from(winner);
                Ok(())
            }
            (status, None) if status.is_over() => Err(SessionError::Inconsistent),
            (_, None) => Ok(()),
        }
    }
}
