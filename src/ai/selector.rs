use super::*;
use crate::Score;
use crate::arena::*;
use crate::play::*;
use rand::Rng;

/// Ranks the legal moves of a position by bounded negamax lookahead.
///
/// Values are always taken from the point of view of the player to move.
/// A decided position is worth `±value` where `value` falls linearly from
/// `WIN_VALUE` on the empty position towards `WIN_FLOOR` at the ply limit, so
/// faster wins and slower losses are preferred however long the game runs.
/// Undecided leaves fall back to a mobility estimate strictly inside
/// `(-WIN_FLOOR, WIN_FLOOR)`, below any decided value.
/// Ramification width only breaks ties between equally valued moves.
#[derive(Debug, Clone, Copy)]
pub struct Selector<'e> {
    engine: &'e Engine,
    difficulty: Difficulty,
}

/// Search bookkeeping for one suggestion.
struct Search {
    budget: usize,
}

impl<'e> Selector<'e> {
    pub fn new(engine: &'e Engine, difficulty: Difficulty) -> Self {
        Self { engine, difficulty }
    }
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// best move for the player on turn, or None when nothing is legal
    pub fn suggest(&self, position: &Position) -> Option<Suggestion> {
        self.suggest_with(position, &mut rand::rng())
    }
    /// as [`Self::suggest`], drawing easy-mode noise from `rng`
    pub fn suggest_with<R: Rng>(&self, position: &Position, rng: &mut R) -> Option<Suggestion> {
        if position.is_terminal() || self.engine.is_terminal(position) {
            return None;
        }
        let remaining = self.engine.rules().ply_limit.saturating_sub(position.len());
        let depth = self.difficulty.lookahead(remaining).saturating_sub(1);
        let ref mut search = Search {
            budget: crate::HARD_NODE_BUDGET,
        };
        let ranked = self
            .engine
            .legal(position)
            .into_iter()
            .map(|m| {
                let value = -self.negamax(&position.with(m), depth, -Score::MAX, Score::MAX, search);
                let noise = match self.difficulty {
                    Difficulty::Easy => rng.random_range(-crate::EASY_NOISE..=crate::EASY_NOISE),
                    _ => 0.,
                };
                (m, value, value + noise + crate::WIDTH_WEIGHT * m.width() as Score)
            })
            .collect::<Vec<_>>();
        let best = ranked
            .iter()
            .fold(None::<&(&ArenaMove, Score, Score)>, |best, candidate| match best {
                Some(b) if b.2 >= candidate.2 => Some(b),
                _ => Some(candidate),
            })?;
        let level = ranked.iter().all(|(_, v, _)| (v - best.1).abs() < Score::EPSILON);
        let reason = self.explain(position, best.0, best.1, level);
        log::debug!(
            "[ai] {} picks {} at {:+.3} ({})",
            self.difficulty,
            best.0.address(),
            best.2,
            reason
        );
        Some(Suggestion {
            choice: best.0.clone(),
            score: best.2,
            reason,
            depth: depth + 1,
        })
    }

    fn negamax(
        &self,
        position: &Position,
        depth: usize,
        mut alpha: Score,
        beta: Score,
        search: &mut Search,
    ) -> Score {
        if let Some(winner) = self.engine.verdict(position) {
            return self.decided(position, winner);
        }
        if depth == 0 || search.budget == 0 {
            return self.estimate(position);
        }
        let mut best = -Score::MAX;
        for m in self.engine.legal(position) {
            search.budget = search.budget.saturating_sub(1);
            let value = -self.negamax(&position.with(m), depth - 1, -beta, -alpha, search);
            best = best.max(value);
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        best
    }

    /// exact value of a finished position for the player on turn
    fn decided(&self, position: &Position, winner: Winner) -> Score {
        let value = self.worth(position.len());
        match winner.player() {
            None => 0.,
            Some(p) if p == position.current() => value,
            Some(_) => -value,
        }
    }

    /// magnitude of a game decided after `plies`, always above `WIN_FLOOR`
    fn worth(&self, plies: usize) -> Score {
        crate::WIN_VALUE - self.discount() * plies.min(self.engine.rules().ply_limit) as Score
    }
    /// value lost per ply, spread so the ply limit still scores above the floor
    fn discount(&self) -> Score {
        (crate::WIN_VALUE - crate::WIN_FLOOR) / (self.engine.rules().ply_limit + 1) as Score
    }
    /// inverse of [`Self::worth`]
    fn plies(&self, value: Score) -> usize {
        ((crate::WIN_VALUE - value.abs()) / self.discount()).round() as usize
    }

    /// mobility balance: our legal moves against the opponent's unplayed supply
    fn estimate(&self, position: &Position) -> Score {
        let mover = position.current();
        let ours = self.engine.legal(position).len() as Score;
        let theirs = self
            .engine
            .arena()
            .owned(mover.other())
            .filter(|m| !position.contains(m.address()))
            .count() as Score;
        0.98 * crate::WIN_FLOOR * (ours - theirs) / (ours + theirs + 1.)
    }

    fn explain(&self, position: &Position, m: &ArenaMove, value: Score, level: bool) -> String {
        let plies = || self.plies(value).saturating_sub(position.len());
        if value >= crate::WIN_FLOOR {
            format!("forces a win within {} plies", plies())
        } else if value <= -crate::WIN_FLOOR {
            format!("every line loses; holds out for {} plies", plies())
        } else if level {
            format!("lines look even; keeps {} branches open", m.width())
        } else if value > 0. {
            format!("leaves the opponent fewer options ({:+.2})", value)
        } else {
            format!("limits the damage to mobility ({:+.2})", value)
        }
    }
}
