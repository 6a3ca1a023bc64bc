use super::*;
use crate::ai::*;
use crate::arena::*;
use crate::play::*;
use rand::Rng;

/// What the arbiter did with a request for the next move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Moved(LogEntry),
    /// the player on turn is manual and no move was supplied
    Waiting(Player),
    /// nothing could move for this automated player; it has forfeited
    Stuck(Player),
    /// the position was already decided; the status has been recorded
    Ended(Status),
}

/// Resolves the next move of a session from its mode and seats.
///
/// Automated seats try their strategy first, then the AI at the fallback
/// difficulty, then a uniformly random legal move. Every move still goes
/// through the engine's checks.
#[derive(Debug, Clone, Copy)]
pub struct Arbiter<'g> {
    game: &'g Game,
    fallback: Difficulty,
}

impl<'g> Arbiter<'g> {
    pub fn new(game: &'g Game) -> Self {
        Self {
            game,
            fallback: Difficulty::default(),
        }
    }
    pub fn with_fallback(mut self, fallback: Difficulty) -> Self {
        self.fallback = fallback;
        self
    }
    pub fn game(&self) -> &Game {
        self.game
    }

    /// a move for `source`, falling back through AI and random play
    pub fn propose<R: Rng>(
        &self,
        source: &Source,
        position: &Position,
        rng: &mut R,
    ) -> Option<(ArenaMove, Origin)> {
        match source {
            Source::Manual => None,
            Source::Random => source
                .propose(self.game, position, rng)
                .map(|m| (m, Origin::Random)),
            Source::Ai(_) => source
                .propose(self.game, position, rng)
                .map(|m| (m, Origin::Ai))
                .or_else(|| self.propose(&Source::Random, position, rng)),
            Source::Strategy(id) => self
                .strategic(id, position)
                .map(|m| (m, Origin::Strategy))
                .or_else(|| self.propose(&Source::Ai(self.fallback), position, rng)),
        }
    }

    /// the strategy's move if it has one and the engine accepts it
    fn strategic(&self, id: &str, position: &Position) -> Option<ArenaMove> {
        let engine = self.game.engine();
        let strategy = self.game.strategies().get(id).or_else(|| {
            log::warn!("[arbiter] unknown strategy {}", id);
            None
        })?;
        let m = strategy.play(engine.arena(), position)?;
        match engine.check(position, m) {
            Ok(()) => Some(m.clone()),
            Err(e) => {
                log::warn!("[arbiter] {} proposed an illegal move: {}", id, e);
                None
            }
        }
    }

    pub fn next_move(
        &self,
        state: &mut GamePlayState,
        manual: Option<&ArenaMove>,
    ) -> Result<Decision, SessionError> {
        self.next_move_with(state, manual, &mut rand::rng())
    }
    pub fn next_move_with<R: Rng>(
        &self,
        state: &mut GamePlayState,
        manual: Option<&ArenaMove>,
        rng: &mut R,
    ) -> Result<Decision, SessionError> {
        if state.is_over() {
            return Err(SessionError::Finished(state.status));
        }
        let engine = self.game.engine();
        if let Some(status) = state.settle(engine) {
            return Ok(Decision::Ended(status));
        }
        let mover = state.current_position.current();
        if !state.mode.automates(mover) {
            return match manual {
                Some(m) => state.apply(engine, m, Origin::Manual).map(Decision::Moved),
                None => Ok(Decision::Waiting(mover)),
            };
        }
        let seat = state.seat(mover).cloned();
        match state.mode {
            Mode::Auto => {
                if manual.is_some() {
                    return Err(SessionError::Automated(mover));
                }
                let source = seat.map(Source::Strategy).unwrap_or(Source::Ai(self.fallback));
                match self.propose(&source, &state.current_position, rng) {
                    Some((m, origin)) => state.apply(engine, &m, origin).map(Decision::Moved),
                    None => {
                        state.forfeit(mover);
                        Ok(Decision::Stuck(mover))
                    }
                }
            }
            _ => {
                let proposal = seat.and_then(|id| self.strategic(&id, &state.current_position));
                match (proposal, manual) {
                    (Some(_), Some(_)) => Err(SessionError::Automated(mover)),
                    (Some(m), None) => state.apply(engine, &m, Origin::Strategy).map(Decision::Moved),
                    (None, Some(m)) => state.apply(engine, m, Origin::Manual).map(Decision::Moved),
                    (None, None) => Ok(Decision::Waiting(mover)),
                }
            }
        }
    }

    /// advance automated seats until a manual seat is on turn or the game ends
    pub fn run(&self, state: &mut GamePlayState) -> Result<Decision, SessionError> {
        self.run_with(state, &mut rand::rng())
    }
    pub fn run_with<R: Rng>(
        &self,
        state: &mut GamePlayState,
        rng: &mut R,
    ) -> Result<Decision, SessionError> {
        loop {
            if state.is_over() {
                return Ok(Decision::Ended(state.status));
            }
            match self.next_move_with(state, None, rng)? {
                Decision::Moved(_) => continue,
                decision => return Ok(decision),
            }
        }
    }
}
