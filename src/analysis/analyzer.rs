use super::*;
use crate::arena::*;
use crate::session::*;
use crate::simulation::*;

/// Estimates strategy strength by simulation against fixed opponents.
///
/// The strategy keeps its own seat; the AI and the random player take the
/// other one.
#[derive(Debug, Clone)]
pub struct Analyzer<'g> {
    simulator: Simulator<'g>,
    config: AnalysisConfig,
}

impl<'g> Analyzer<'g> {
    pub fn new(simulator: Simulator<'g>, config: AnalysisConfig) -> Self {
        Self { simulator, config }
    }
    pub fn config(&self) -> AnalysisConfig {
        self.config
    }

    pub fn analyze_strategy(&self, id: &str) -> Result<StrategyReport, SimulationError> {
        let game = self.simulator.game();
        let strategy = game
            .strategies()
            .get(id)
            .ok_or_else(|| SessionError::UnknownStrategy(id.to_string()))?;
        let player = strategy.player();
        let ours = Source::Strategy(id.to_string());
        let against = |opponent: Source| {
            let (p, o) = match player {
                Player::P => (&ours, &opponent),
                Player::O => (&opponent, &ours),
            };
            self.simulator.simulate_batch(p, o, self.config.game_count)
        };
        let ai = against(Source::Ai(self.config.difficulty));
        let random = against(Source::Random);
        let total = ai + random;
        let report = StrategyReport {
            strategy_id: id.to_string(),
            player,
            win_rate: ratio(total.wins(player), total.games),
            avg_moves: total.avg_moves(),
            vs_ai: Record::of(&ai, player),
            vs_random: Record::of(&random, player),
        };
        log::info!("[analyzer] {} wins {:.3}", id, report.win_rate);
        Ok(report)
    }

    /// highest win rate among `player`'s strategies, faster wins breaking ties
    pub fn find_best(&self, player: Player) -> Result<Option<Best>, SimulationError> {
        let mut best = None::<StrategyReport>;
        for strategy in self.simulator.game().strategies().of(player) {
            let report = self.analyze_strategy(strategy.id())?;
            best = match best {
                Some(b)
                    if b.win_rate > report.win_rate
                        || (b.win_rate == report.win_rate && b.avg_moves <= report.avg_moves) =>
                {
                    Some(b)
                }
                _ => Some(report),
            };
        }
        Ok(best.as_ref().map(Best::from))
    }

    pub fn analyze_arena(arena: &Arena) -> ArenaSummary {
        ArenaSummary::from(arena)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Difficulty;
    use crate::play::*;
    use crate::strategy::*;

    fn addr(s: &str) -> Address {
        Address::from(s)
    }

    fn line(engine: &Engine, addresses: &[&str]) -> Vec<ArenaMove> {
        let addresses = addresses.iter().map(|a| addr(a)).collect::<Vec<_>>();
        engine.restore(&addresses).unwrap().sequence().to_vec()
    }

    /// choice arena under the ramified rule, with a good and a bad opener for P
    fn game() -> Game {
        let engine = Engine::new(fixtures::choice(), Rules::ramified());
        let mut game = Game::new("choice", engine.clone());
        let mut good = Strategy::new("good", "choice", "d", Player::P);
        let mut bad = Strategy::new("bad", "choice", "d", Player::P);
        let mut reply = Strategy::new("reply", "choice", "d", Player::O);
        good.record(&line(&engine, &["1", "1.0", "1.0.0"]));
        bad.record(&line(&engine, &["0", "0.0"]));
        reply.record(&line(&engine, &["1", "1.0"]));
        for strategy in [good, bad, reply] {
            game.register(strategy).unwrap();
        }
        game
    }

    fn analyzer(game: &Game) -> Analyzer<'_> {
        let config = AnalysisConfig {
            game_count: 10,
            difficulty: Difficulty::Medium,
        };
        Analyzer::new(Simulator::new(game).with_seed(3), config)
    }

    #[test]
    fn reports_both_opponents() {
        let game = game();
        let report = analyzer(&game).analyze_strategy("good").unwrap();
        assert_eq!(report.player, Player::P);
        assert_eq!(report.vs_ai.games, 10);
        assert_eq!(report.vs_random.games, 10);
        assert_eq!(report.vs_ai.wins, 10);
        assert_eq!(report.win_rate, 1.);
        assert_eq!(report.avg_moves, 3.);
        let bad = analyzer(&game).analyze_strategy("bad").unwrap();
        assert_eq!(bad.win_rate, 0.);
    }

    #[test]
    fn opponent_strategies_play_their_own_seat() {
        let game = game();
        let report = analyzer(&game).analyze_strategy("reply").unwrap();
        assert_eq!(report.player, Player::O);
        assert_eq!(report.vs_ai.anomalies, 0);
        assert_eq!(report.vs_ai.losses, 10);
    }

    #[test]
    fn best_belongs_to_the_requested_seat() {
        let game = game();
        let analyzer = analyzer(&game);
        let best = analyzer.find_best(Player::P).unwrap().unwrap();
        assert_eq!(best.strategy_id, "good");
        assert_eq!(game.strategies().get(&best.strategy_id).map(|s| s.player()), Some(Player::P));
        let best = analyzer.find_best(Player::O).unwrap().unwrap();
        assert_eq!(best.strategy_id, "reply");
    }

    #[test]
    fn empty_seats_have_no_best() {
        let game = Game::new("empty", Engine::new(fixtures::single(), Rules::default()));
        assert_eq!(analyzer(&game).find_best(Player::O), Ok(None));
    }

    #[test]
    fn unknown_strategies_are_errors() {
        let game = game();
        assert!(matches!(
            analyzer(&game).analyze_strategy("ghost"),
            Err(SimulationError::Seat(SessionError::UnknownStrategy(_)))
        ));
    }
}
