use super::*;
use crate::GameId;
use crate::StrategyId;
use crate::arena::*;
use crate::play::*;
use crate::strategy::*;

/// A registered game: one engine over one arena, plus its strategies.
///
/// Sessions and simulations refer back to the game by id and never own
/// the arena or the strategies themselves.
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    engine: Engine,
    strategies: Strategies,
}

impl Game {
    pub fn new(id: impl Into<GameId>, engine: Engine) -> Self {
        Self {
            id: id.into(),
            engine,
            strategies: Strategies::default(),
        }
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
    pub fn arena(&self) -> &Arena {
        self.engine.arena()
    }
    pub fn strategies(&self) -> &Strategies {
        &self.strategies
    }
    /// add a strategy after checking it against this game's arena
    pub fn register(&mut self, strategy: Strategy) -> Result<Option<Strategy>, SessionError> {
        if strategy.game_id() != self.id {
            return Err(SessionError::WrongGame(strategy.id().to_string()));
        }
        strategy.validate(self.arena())?;
        log::debug!("[game] {} registers {}", self.id, strategy);
        Ok(self.strategies.insert(strategy))
    }
    /// the strategy `id`, provided it plays `player`
    pub fn seat(&self, id: &str, player: Player) -> Result<&Strategy, SessionError> {
        let strategy = self
            .strategies
            .get(id)
            .ok_or_else(|| SessionError::UnknownStrategy(id.to_string()))?;
        match strategy.player() == player {
            true => Ok(strategy),
            false => Err(SessionError::WrongSeat {
                strategy: id.to_string(),
                player,
            }),
        }
    }
    /// open a fresh session in `setup`
    pub fn start(
        &self,
        mode: Mode,
        p_strategy: Option<StrategyId>,
        o_strategy: Option<StrategyId>,
    ) -> Result<GamePlayState, SessionError> {
        for (player, seat) in [(Player::P, &p_strategy), (Player::O, &o_strategy)] {
            match seat {
                Some(id) => self.seat(id, player).map(|_| ())?,
                None if mode != Mode::Auto && mode.automates(player) => {
                    return Err(SessionError::Unassigned(player));
                }
                None => continue,
            }
        }
        log::info!("[game] {} starts in {} mode", self.id, mode);
        Ok(GamePlayState::new(
            self.id.clone(),
            mode,
            p_strategy,
            o_strategy,
            self.engine.root(),
        ))
    }
}
