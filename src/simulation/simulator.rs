use super::*;
use crate::ai::Difficulty;
use crate::arena::Player;
use crate::play::Winner;
use crate::session::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// Plays games of one registered game end to end, with no manual seats.
///
/// Runs only read the game, so batches fan out across rayon's pool. Run `i`
/// of a batch draws from its own rng seeded with `seed + i`, which makes a
/// seeded batch reproducible and lets two consecutive seeded batches add up
/// to one larger batch exactly. Cancellation is checked before each run;
/// a game that has started always finishes.
#[derive(Debug, Clone)]
pub struct Simulator<'g> {
    game: &'g Game,
    seed: Option<u64>,
    fallback: Difficulty,
    cancel: Arc<AtomicBool>,
}

impl<'g> Simulator<'g> {
    pub fn new(game: &'g Game) -> Self {
        Self {
            game,
            seed: None,
            fallback: Difficulty::default(),
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn with_fallback(mut self, fallback: Difficulty) -> Self {
        self.fallback = fallback;
        self
    }
    /// share a cancellation flag with the caller
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }
    pub fn game(&self) -> &Game {
        self.game
    }
    pub fn cancel(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }
    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed) || crate::interrupted()
    }

    /// one game from the empty position
    pub fn simulate_one(&self, p: &Source, o: &Source) -> Result<SimulationResult, SimulationError> {
        match self.seed {
            Some(seed) => self.simulate_with(p, o, &mut SmallRng::seed_from_u64(seed)),
            None => self.simulate_with(p, o, &mut rand::rng()),
        }
    }
    pub fn simulate_with<R: Rng>(
        &self,
        p: &Source,
        o: &Source,
        rng: &mut R,
    ) -> Result<SimulationResult, SimulationError> {
        self.check(Player::P, p)?;
        self.check(Player::O, o)?;
        let start = Instant::now();
        let engine = self.game.engine();
        let arbiter = Arbiter::new(self.game).with_fallback(self.fallback);
        let mut position = engine.root();
        let winner = loop {
            if let Some(winner) = engine.verdict(&position) {
                break winner;
            }
            let mover = position.current();
            let seat = match mover {
                Player::P => p,
                Player::O => o,
            };
            match arbiter.propose(seat, &position, rng) {
                Some((m, _)) => position = engine.apply(&position, &m)?,
                None => {
                    log::warn!("[simulator] {} stuck at {}", mover, position);
                    break Winner::from(mover.other());
                }
            }
        };
        log::trace!("[simulator] {} vs {}: {} wins at {}", p, o, winner, position);
        Ok(SimulationResult {
            winner,
            moves: position.len(),
            duration: start.elapsed(),
        })
    }

    /// `n` independent games, reduced in parallel
    pub fn simulate_batch(&self, p: &Source, o: &Source, n: usize) -> BatchResult {
        let base = self.seed.unwrap_or_else(rand::random);
        let result = (0..n)
            .into_par_iter()
            .map(|i| match self.is_cancelled() {
                true => BatchResult::skipped(),
                false => {
                    let ref mut rng = SmallRng::seed_from_u64(base.wrapping_add(i as u64));
                    BatchResult::from(self.simulate_with(p, o, rng))
                }
            })
            .sum::<BatchResult>();
        if result.anomalies > 0 {
            log::warn!("[simulator] {} of {} runs failed", result.anomalies, n);
        }
        log::info!("[simulator] {} vs {}: {}", p, o, result);
        result
    }

    /// every P strategy against every O strategy, `games` games per pairing
    pub fn run_tournament(&self, games: usize) -> TournamentResult {
        let strategies = self.game.strategies();
        let mut pairings = Vec::new();
        let mut cancelled = false;
        'pairs: for p in strategies.of(Player::P) {
            for o in strategies.of(Player::O) {
                if self.is_cancelled() {
                    cancelled = true;
                    break 'pairs;
                }
                let result = self.simulate_batch(
                    &Source::Strategy(p.id().to_string()),
                    &Source::Strategy(o.id().to_string()),
                    games,
                );
                cancelled |= result.cancelled;
                pairings.push(Pairing {
                    p_strategy_id: p.id().to_string(),
                    o_strategy_id: o.id().to_string(),
                    result,
                });
            }
        }
        let result = TournamentResult::new(strategies, pairings, cancelled);
        if let Some(leader) = result.leader() {
            log::info!(
                "[simulator] tournament leader {} at {:.3}",
                leader.strategy_id,
                leader.win_rate
            );
        }
        result
    }

    fn check(&self, player: Player, source: &Source) -> Result<(), SimulationError> {
        match source {
            Source::Manual => Err(SimulationError::ManualSeat(player)),
            Source::Strategy(id) => self.game.seat(id, player).map(|_| ()).map_err(Into::into),
            Source::Ai(_) | Source::Random => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::arena::*;
    use crate::play::*;
    use crate::strategy::*;

    fn addr(s: &str) -> Address {
        Address::from(s)
    }

    /// fork arena under the ramified rule: O's reply alone decides the game
    fn fork() -> Game {
        let engine = Engine::new(fixtures::fork(), Rules::ramified());
        let mut game = Game::new("fork", engine.clone());
        let left = engine
            .restore(&[addr("0"), addr("0.0"), addr("0.0.0")])
            .unwrap();
        let right = engine.restore(&[addr("0"), addr("0.1")]).unwrap();
        let mut p = Strategy::new("p", "fork", "d", Player::P);
        let mut o_left = Strategy::new("o-left", "fork", "d", Player::O);
        let mut o_right = Strategy::new("o-right", "fork", "d", Player::O);
        p.record(left.sequence());
        o_left.record(left.sequence());
        o_right.record(right.sequence());
        for strategy in [p, o_left, o_right] {
            game.register(strategy).unwrap();
        }
        game
    }

    #[test]
    fn random_play_is_unbiased_on_a_fair_arena() {
        let game = fork();
        let batch = Simulator::new(&game)
            .with_seed(17)
            .simulate_batch(&Source::Random, &Source::Random, 50);
        assert_eq!(batch.games, 50);
        assert_eq!(batch.completed(), 50);
        assert!((batch.p_win_rate() - batch.o_win_rate()).abs() < 0.5);
    }

    #[test]
    fn seeded_batches_add_up_exactly() {
        let game = Game::new("r", Engine::new(Arena::random(), Rules::default()));
        let (p, o) = (Source::Random, Source::Ai(Difficulty::Easy));
        let whole = Simulator::new(&game).with_seed(5).simulate_batch(&p, &o, 30);
        let head = Simulator::new(&game).with_seed(5).simulate_batch(&p, &o, 12);
        let tail = Simulator::new(&game).with_seed(17).simulate_batch(&p, &o, 18);
        assert_eq!(head + tail, whole);
    }

    #[test]
    fn deterministic_strategies_add_up_exactly() {
        let game = fork();
        let simulator = Simulator::new(&game);
        let (p, o) = (Source::Strategy("p".into()), Source::Strategy("o-left".into()));
        let head = simulator.simulate_batch(&p, &o, 7);
        let tail = simulator.simulate_batch(&p, &o, 5);
        let whole = simulator.simulate_batch(&p, &o, 12);
        assert_eq!(head.p_wins + tail.p_wins, whole.p_wins);
        assert_eq!(whole.p_wins, 12);
        assert_eq!(whole.avg_moves(), 3.);
    }

    #[test]
    fn games_stop_at_the_ply_limit() {
        for _ in 0..8 {
            let game = Game::new(
                "r",
                Engine::new(Arena::random(), Rules::default().with_ply_limit(6)),
            );
            let simulator = Simulator::new(&game);
            for _ in 0..8 {
                let result = simulator
                    .simulate_one(&Source::Random, &Source::Random)
                    .unwrap();
                assert!(result.moves <= 6);
            }
        }
    }

    #[test]
    fn bad_seats_are_anomalies() {
        let game = fork();
        let simulator = Simulator::new(&game);
        assert_eq!(
            simulator.simulate_one(&Source::Random, &Source::Manual),
            Err(SimulationError::ManualSeat(Player::O))
        );
        let batch = simulator.simulate_batch(&Source::Strategy("o-left".into()), &Source::Random, 4);
        assert_eq!(batch.anomalies, 4);
        assert_eq!(batch.completed(), 0);
        assert_eq!(batch.p_win_rate(), 0.);
    }

    #[test]
    fn cancelled_batches_are_partial() {
        let game = fork();
        let simulator = Simulator::new(&game);
        simulator.cancel().store(true, Ordering::Relaxed);
        let batch = simulator.simulate_batch(&Source::Random, &Source::Random, 10);
        assert!(batch.cancelled);
        assert_eq!(batch.games, 0);
        assert!(simulator.run_tournament(3).cancelled);
    }

    #[test]
    fn tournament_ranks_the_winning_reply_first() {
        let game = fork();
        let result = Simulator::new(&game).run_tournament(4);
        assert_eq!(result.pairings.len(), 2);
        let order = result
            .standings
            .iter()
            .map(|s| s.strategy_id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(order, vec!["o-right", "p", "o-left"]);
        assert_eq!(result.standings[1].wins, 4);
        assert_eq!(result.standings[1].losses, 4);
    }
}
