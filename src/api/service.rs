use super::*;
use crate::GameId;
use crate::ai::*;
use crate::analysis::*;
use crate::arena::*;
use crate::play::*;
use crate::session::*;
use crate::simulation::*;
use crate::strategy::*;
use std::collections::HashMap;

/// The engine's external operations.
///
/// Holds nothing between calls except the strategies registered per game.
/// Arenas are rebuilt from each request's config, which the builder turns
/// into the same arena every time, and session state travels with the caller.
#[derive(Debug, Default)]
pub struct Service<B: ArenaBuilder = Unfolding> {
    builder: B,
    strategies: HashMap<GameId, Strategies>,
}

impl<B: ArenaBuilder> Service<B> {
    pub fn new(builder: B) -> Self {
        Self {
            builder,
            strategies: HashMap::new(),
        }
    }
    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// rebuild the game a request refers to, with its registered strategies
    pub fn game(&self, game: &GameRef) -> Result<Game, ApiError> {
        let arena = self.builder.build(&game.arena_config)?;
        let mut built = Game::new(game.game_id.clone(), Engine::new(arena, game.rules));
        for strategy in self.strategies.get(&game.game_id).into_iter().flat_map(|s| s.iter()) {
            if let Err(e) = built.register(strategy.clone()) {
                log::warn!("[service] skipping {} for {}: {}", strategy.id(), game.game_id, e);
            }
        }
        Ok(built)
    }
    /// store a strategy once it checks out against the game's arena
    pub fn register(&mut self, request: RegisterRequest) -> Result<(), ApiError> {
        self.admit(&request)?;
        self.store(request);
        Ok(())
    }
    /// check a strategy against the arena its request describes
    pub fn admit(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let mut game = self.game(&request.game)?;
        game.register(request.strategy.clone())?;
        Ok(())
    }
    /// keep an admitted strategy for later requests on its game
    pub fn store(&mut self, request: RegisterRequest) {
        self.strategies
            .entry(request.game.game_id)
            .or_default()
            .insert(request.strategy);
    }
    pub fn strategies(&self, game_id: &str) -> Option<&Strategies> {
        self.strategies.get(game_id)
    }

    pub fn initialize(&self, request: InitializeRequest) -> Result<InitializeResponse, ApiError> {
        let game = self.game(&request.game)?;
        let mut state = game.start(request.mode, request.p_strategy_id, request.o_strategy_id)?;
        if state.mode != Mode::Auto {
            Arbiter::new(&game).run(&mut state)?;
        }
        Ok(InitializeResponse {
            position: state.current_position.clone(),
            available_moves: available(&game, &state),
            state,
        })
    }
    /// apply the caller's move, then let any automated seat answer
    pub fn play(&self, request: MoveRequest) -> Result<MoveResponse, ApiError> {
        let game = self.game(&request.game)?;
        let mut state = self.restore(&game, request.state)?;
        let m = game.engine().resolve(&request.address)?.clone();
        let arbiter = Arbiter::new(&game);
        let before = state.move_log.len();
        arbiter.next_move(&mut state, Some(&m))?;
        if state.mode != Mode::Auto && !state.is_over() {
            arbiter.run(&mut state)?;
        }
        Ok(advanced(&game, state, before))
    }
    /// let the arbiter move for automated seats; how `auto` games progress
    pub fn step(&self, request: StepRequest) -> Result<MoveResponse, ApiError> {
        let game = self.game(&request.game)?;
        let mut state = self.restore(&game, request.state)?;
        let arbiter = Arbiter::new(&game);
        let before = state.move_log.len();
        let decision = match request.to_end {
            true => arbiter.run(&mut state)?,
            false => arbiter.next_move(&mut state, None)?,
        };
        log::debug!("[service] {} step: {:?}", game.id(), decision);
        Ok(advanced(&game, state, before))
    }
    /// a suggestion for the player on turn; never applied
    pub fn ai_move(&self, request: AiMoveRequest) -> Result<AiMoveResponse, ApiError> {
        let game = self.game(&request.game)?;
        let state = self.restore(&game, request.state)?;
        let suggestion = match state.is_over() {
            true => None,
            false => Selector::new(game.engine(), request.difficulty).suggest(&state.current_position),
        };
        Ok(AiMoveResponse { suggestion })
    }
    pub fn simulate(&self, request: SimulateRequest) -> Result<SimulationResult, ApiError> {
        let game = self.game(&request.game)?;
        let simulator = simulator(&game, request.seed);
        Ok(simulator.simulate_one(&request.p_source, &request.o_source)?)
    }
    pub fn batch_simulate(&self, request: BatchRequest) -> Result<BatchResult, ApiError> {
        let game = self.game(&request.game)?;
        let simulator = simulator(&game, request.seed);
        Ok(simulator.simulate_batch(&request.p_source, &request.o_source, request.game_count))
    }
    pub fn tournament(&self, request: TournamentRequest) -> Result<TournamentResult, ApiError> {
        let game = self.game(&request.game)?;
        Ok(simulator(&game, request.seed).run_tournament(request.game_count))
    }
    pub fn analyze_strategy(&self, request: AnalyzeStrategyRequest) -> Result<StrategyReport, ApiError> {
        let game = self.game(&request.game)?;
        let analyzer = Analyzer::new(simulator(&game, request.seed), request.config);
        Ok(analyzer.analyze_strategy(&request.strategy_id)?)
    }
    pub fn analyze_arena(&self, request: AnalyzeArenaRequest) -> Result<ArenaSummary, ApiError> {
        let arena = self.builder.build(&request.arena_config)?;
        Ok(Analyzer::analyze_arena(&arena))
    }
    pub fn find_best(&self, request: FindBestRequest) -> Result<Option<Best>, ApiError> {
        let game = self.game(&request.game)?;
        let analyzer = Analyzer::new(simulator(&game, request.seed), request.config);
        Ok(analyzer.find_best(request.player)?)
    }

    /// accept a caller's state only after replaying it through the engine
    fn restore(&self, game: &Game, mut state: GamePlayState) -> Result<GamePlayState, ApiError> {
        if state.game_id != game.id() {
            return Err(ApiError::Mismatch {
                expected: game.id().to_string(),
                found: state.game_id,
            });
        }
        state.revalidate(game.engine())?;
        Ok(state)
    }
}

fn available(game: &Game, state: &GamePlayState) -> Vec<ArenaMove> {
    match state.is_over() {
        true => Vec::new(),
        false => game
            .engine()
            .legal(&state.current_position)
            .into_iter()
            .cloned()
            .collect(),
    }
}

/// response for a state that gained every log entry from `before` on
fn advanced(game: &Game, state: GamePlayState, before: usize) -> MoveResponse {
    MoveResponse {
        position: state.current_position.clone(),
        available_moves: available(game, &state),
        is_game_over: state.is_over(),
        status: state.status,
        applied: state.move_log[before..].to_vec(),
        state,
    }
}

fn simulator(game: &Game, seed: Option<u64>) -> Simulator<'_> {
    match seed {
        Some(seed) => Simulator::new(game).with_seed(seed),
        None => Simulator::new(game),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Service {
        Service::default()
    }

    fn reference() -> GameRef {
        GameRef::new("g", ArenaConfig::new("left", "right", 3, 2).dense(), Rules::ramified())
    }

    fn initialize(service: &Service, mode: Mode) -> InitializeResponse {
        service
            .initialize(InitializeRequest {
                game: reference(),
                mode,
                p_strategy_id: None,
                o_strategy_id: None,
            })
            .unwrap()
    }

    fn opener(address: &str) -> Strategy {
        let service = fresh();
        let game = service.game(&reference()).unwrap();
        let m = game.engine().resolve(&Address::from(address)).unwrap();
        let mut strategy = Strategy::new("opener", "g", "left", Player::P);
        strategy.learn(&Position::default(), m).unwrap();
        strategy
    }

    #[test]
    fn initialize_offers_the_opening() {
        let service = fresh();
        let response = initialize(&service, Mode::Manual);
        assert!(response.position.is_empty());
        assert_eq!(response.available_moves.len(), 1);
        assert!(response.available_moves[0].is_initial());
        assert_eq!(response.state.status, Status::Setup);
    }

    #[test]
    fn moves_round_trip_through_the_caller() {
        let service = fresh();
        let mut state = initialize(&service, Mode::Manual).state;
        for address in ["0", "0.1", "0.1.0"] {
            let json = serde_json::to_string(&state).unwrap();
            let response = service
                .play(MoveRequest {
                    game: reference(),
                    address: Address::from(address),
                    state: serde_json::from_str(&json).unwrap(),
                })
                .unwrap();
            assert_eq!(response.applied.len(), 1);
            state = response.state;
        }
        assert_eq!(state.status, Status::PWins);
        let over = service.play(MoveRequest {
            game: reference(),
            address: Address::from("0.0"),
            state,
        });
        assert!(matches!(over, Err(ApiError::Session(SessionError::Finished(_)))));
    }

    #[test]
    fn illegal_moves_leave_state_alone() {
        let service = fresh();
        let state = initialize(&service, Mode::Manual).state;
        let result = service.play(MoveRequest {
            game: reference(),
            address: Address::from("0.0"),
            state: state.clone(),
        });
        assert!(matches!(result, Err(ApiError::Session(SessionError::Illegal(_)))));
        let foreign = GamePlayState {
            game_id: "other".into(),
            ..state
        };
        assert!(matches!(
            service.play(MoveRequest {
                game: reference(),
                address: Address::from("0"),
                state: foreign,
            }),
            Err(ApiError::Mismatch { .. })
        ));
    }

    #[test]
    fn auto_games_advance_by_steps() {
        let service = fresh();
        let mut state = initialize(&service, Mode::Auto).state;
        assert!(state.move_log.is_empty());
        let refused = service.play(MoveRequest {
            game: reference(),
            address: Address::from("0"),
            state: state.clone(),
        });
        assert!(matches!(refused, Err(ApiError::Session(SessionError::Automated(Player::P)))));
        while !state.is_over() {
            let response = service
                .step(StepRequest {
                    game: reference(),
                    state,
                    to_end: false,
                })
                .unwrap();
            assert!(response.applied.len() <= 1);
            state = response.state;
        }
        assert!(!state.move_log.is_empty());
        assert!(state.move_log.len() <= 3);
    }

    #[test]
    fn auto_games_run_to_the_end_in_one_step() {
        let service = fresh();
        let state = initialize(&service, Mode::Auto).state;
        let response = service
            .step(StepRequest {
                game: reference(),
                state,
                to_end: true,
            })
            .unwrap();
        assert!(response.is_game_over);
        assert!(response.available_moves.is_empty());
        assert_eq!(response.applied.len(), response.state.move_log.len());
        assert!(response.applied.iter().all(|e| e.source != Origin::Manual));
    }

    #[test]
    fn ai_move_suggests_without_applying() {
        let service = fresh();
        let state = initialize(&service, Mode::Manual).state;
        let response = service
            .ai_move(AiMoveRequest {
                game: reference(),
                difficulty: Difficulty::Hard,
                state: state.clone(),
            })
            .unwrap();
        assert_eq!(response.suggestion.map(|s| s.choice.address().clone()), Some(Address::from("0")));
        assert!(state.move_log.is_empty());
    }

    #[test]
    fn registered_strategies_drive_their_seat() {
        let mut service = fresh();
        service
            .register(RegisterRequest {
                game: reference(),
                strategy: opener("0"),
            })
            .unwrap();
        let response = service
            .initialize(InitializeRequest {
                game: reference(),
                mode: Mode::PStrategy,
                p_strategy_id: Some("opener".into()),
                o_strategy_id: None,
            })
            .unwrap();
        assert_eq!(response.position.len(), 1);
        assert_eq!(response.state.status, Status::Playing);
        assert!(response.available_moves.iter().all(|m| m.player() == Player::O));
    }

    #[test]
    fn oversized_arenas_are_refused() {
        let service = fresh();
        let request = AnalyzeArenaRequest {
            arena_config: ArenaConfig::new("a", "b", 12, 5),
        };
        assert!(matches!(service.analyze_arena(request), Err(ApiError::Arena(ArenaError::TooLarge { .. }))));
    }

    #[test]
    fn batch_and_tournament_use_registered_strategies() {
        let mut service = fresh();
        service
            .register(RegisterRequest {
                game: reference(),
                strategy: opener("0"),
            })
            .unwrap();
        let batch = service
            .batch_simulate(BatchRequest {
                game: reference(),
                p_source: Source::Strategy("opener".into()),
                o_source: Source::Random,
                game_count: 8,
                seed: Some(1),
            })
            .unwrap();
        assert_eq!(batch.games, 8);
        assert_eq!(batch.anomalies, 0);
        let tournament = service
            .tournament(TournamentRequest {
                game: reference(),
                game_count: 2,
                seed: Some(1),
            })
            .unwrap();
        assert!(tournament.pairings.is_empty());
        assert_eq!(tournament.standings.len(), 1);
        let best = service
            .find_best(FindBestRequest {
                game: reference(),
                player: Player::P,
                config: AnalysisConfig {
                    game_count: 4,
                    difficulty: Difficulty::Easy,
                },
                seed: Some(2),
            })
            .unwrap();
        assert_eq!(best.map(|b| b.strategy_id), Some("opener".to_string()));
    }
}
