//! Ludics Command-Line Driver
//!
//! Builds an arena from two behaviour ids and plays, simulates or analyzes it.
//! Long runs stop early on "Q" + Enter or after SIMULATION_DURATION.

use clap::Args;
use clap::Parser;
use colored::*;
use dialoguer::Select;
use ludics::ai::*;
use ludics::analysis::*;
use ludics::arena::*;
use ludics::play::*;
use ludics::session::*;
use ludics::simulation::*;
use ludics::strategy::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Play, simulate and analyze games over ludics arenas", long_about = None)]
enum Command {
    #[command(about = "Summarize the arena built from two behaviours")]
    Arena {
        #[command(flatten)]
        setup: Setup,
        #[arg(long, help = "Print every move as JSON")]
        json: bool,
    },
    #[command(about = "Play one automated game", alias = "sim")]
    Simulate {
        #[command(flatten)]
        setup: Setup,
        #[arg(short, default_value = "random")]
        p: Source,
        #[arg(short, default_value = "random")]
        o: Source,
        #[arg(long)]
        seed: Option<u64>,
    },
    #[command(about = "Play many automated games in parallel")]
    Batch {
        #[command(flatten)]
        setup: Setup,
        #[arg(short, default_value = "random")]
        p: Source,
        #[arg(short, default_value = "random")]
        o: Source,
        #[arg(short = 'n', long, default_value_t = ludics::DEFAULT_GAME_COUNT)]
        games: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    #[command(about = "Pit every P strategy against every O strategy")]
    Tournament {
        #[command(flatten)]
        setup: Setup,
        #[arg(short = 'n', long, default_value_t = ludics::DEFAULT_GAME_COUNT)]
        games: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    #[command(about = "Measure one strategy against the AI and random play")]
    Analyze {
        #[command(flatten)]
        setup: Setup,
        #[arg(required = true)]
        strategy: String,
        #[command(flatten)]
        analysis: Analysis,
    },
    #[command(about = "Find the strongest strategy for one seat")]
    Best {
        #[command(flatten)]
        setup: Setup,
        #[arg(required = true)]
        player: Player,
        #[command(flatten)]
        analysis: Analysis,
    },
    #[command(about = "Play interactively against strategies or the AI")]
    Play {
        #[command(flatten)]
        setup: Setup,
        #[arg(long, default_value = "manual")]
        mode: Mode,
        #[arg(long)]
        p_strategy: Option<String>,
        #[arg(long)]
        o_strategy: Option<String>,
        #[arg(long, help = "Save the moves you made as a strategy to this file")]
        record: Option<PathBuf>,
    },
}

/// Which arena to build and which strategies to load into it.
#[derive(Args)]
struct Setup {
    #[arg(long, default_value = "cli")]
    game: String,
    #[arg(long, default_value = "positive")]
    positive: String,
    #[arg(long, default_value = "negative")]
    negative: String,
    #[arg(short, long, default_value_t = ludics::DEFAULT_MAX_DEPTH)]
    depth: usize,
    #[arg(short, long, default_value_t = ludics::DEFAULT_MAX_RAMIFICATION)]
    ramification: usize,
    #[arg(long, help = "Open every branch instead of sampling widths")]
    dense: bool,
    #[arg(long, help = "Require each move to sit on a branch its predecessor opened")]
    ramified: bool,
    #[arg(long, default_value_t = ludics::DEFAULT_PLY_LIMIT)]
    ply_limit: usize,
    #[arg(short, long, help = "JSON file holding an array of strategies")]
    strategies: Option<PathBuf>,
}

#[derive(Args)]
struct Analysis {
    #[arg(short = 'n', long, default_value_t = ludics::DEFAULT_GAME_COUNT)]
    games: usize,
    #[arg(long, default_value = "medium")]
    difficulty: Difficulty,
    #[arg(long)]
    seed: Option<u64>,
}

impl Analysis {
    fn analyzer<'g>(&self, game: &'g Game) -> Analyzer<'g> {
        let config = AnalysisConfig {
            game_count: self.games,
            difficulty: self.difficulty,
        };
        Analyzer::new(seeded(game, self.seed), config)
    }
}

impl Setup {
    fn config(&self) -> ArenaConfig {
        ArenaConfig {
            positive: self.positive.clone(),
            negative: self.negative.clone(),
            max_depth: self.depth,
            max_ramification: self.ramification,
            dense: self.dense,
        }
    }
    fn rules(&self) -> Rules {
        let rules = match self.ramified {
            true => Rules::ramified(),
            false => Rules::default(),
        };
        rules.with_ply_limit(self.ply_limit)
    }
    fn game(&self) -> anyhow::Result<Game> {
        let arena = Unfolding::default().build(&self.config())?;
        let mut game = Game::new(self.game.clone(), Engine::new(arena, self.rules()));
        if let Some(ref path) = self.strategies {
            let file = std::fs::File::open(path)?;
            let strategies = serde_json::from_reader::<_, Vec<Strategy>>(file)?;
            for strategy in strategies {
                game.register(strategy)?;
            }
        }
        log::info!(
            "built {} with {} moves and {} strategies",
            game.arena().id(),
            game.arena().len(),
            game.strategies().len()
        );
        Ok(game)
    }
}

fn seeded(game: &Game, seed: Option<u64>) -> Simulator<'_> {
    match seed {
        Some(seed) => Simulator::new(game).with_seed(seed),
        None => Simulator::new(game),
    }
}

fn paint(winner: Winner) -> ColoredString {
    match winner {
        Winner::P => "P".green().bold(),
        Winner::O => "O".red().bold(),
        Winner::Draw => "draw".yellow().bold(),
    }
}

impl Command {
    fn run(self) -> anyhow::Result<()> {
        match self {
            Self::Arena { setup, json } => {
                let game = setup.game()?;
                println!("{}", ArenaSummary::from(game.arena()));
                if json {
                    println!("{}", serde_json::to_string_pretty(game.arena())?);
                }
            }
            Self::Simulate { setup, p, o, seed } => {
                let game = setup.game()?;
                let result = seeded(&game, seed).simulate_one(&p, &o)?;
                println!(
                    "{} wins after {} moves ({:?})",
                    paint(result.winner),
                    result.moves,
                    result.duration
                );
            }
            Self::Batch {
                setup,
                p,
                o,
                games,
                seed,
            } => {
                let game = setup.game()?;
                let batch = seeded(&game, seed).simulate_batch(&p, &o, games);
                println!("{} vs {}", p.to_string().bold(), o.to_string().bold());
                println!("{}", batch);
            }
            Self::Tournament { setup, games, seed } => {
                let game = setup.game()?;
                let result = seeded(&game, seed).run_tournament(games);
                for (i, standing) in result.standings.iter().enumerate() {
                    println!(
                        "{:>2}. {:<16} {}  {:.3}  {}W {}L {}D",
                        i + 1,
                        standing.strategy_id.bold(),
                        standing.player,
                        standing.win_rate,
                        standing.wins,
                        standing.losses,
                        standing.draws
                    );
                }
                if result.cancelled {
                    println!("{}", "cancelled; standings are partial".yellow());
                }
            }
            Self::Analyze {
                setup,
                strategy,
                analysis,
            } => {
                let game = setup.game()?;
                println!("{}", analysis.analyzer(&game).analyze_strategy(&strategy)?);
            }
            Self::Best {
                setup,
                player,
                analysis,
            } => {
                let game = setup.game()?;
                match analysis.analyzer(&game).find_best(player)? {
                    Some(best) => println!(
                        "{} wins {:.3} in {:.1} moves",
                        best.strategy_id.bold(),
                        best.win_rate,
                        best.avg_moves
                    ),
                    None => println!("no strategies registered for {}", player),
                }
            }
            Self::Play {
                setup,
                mode,
                p_strategy,
                o_strategy,
                record,
            } => {
                let game = setup.game()?;
                let state = game.start(mode, p_strategy, o_strategy)?;
                let state = interact(&game, state)?;
                if let Some(path) = record {
                    save(&game, &state, &path)?;
                }
            }
        }
        Ok(())
    }
}

/// Options offered besides the legal moves.
const UNDO: &str = "undo";
const HINT: &str = "hint";
const QUIT: &str = "abandon";

fn interact(game: &Game, mut state: GamePlayState) -> anyhow::Result<GamePlayState> {
    let arbiter = Arbiter::new(game);
    while !state.is_over() {
        match arbiter.next_move(&mut state, None)? {
            Decision::Moved(entry) => println!("{}", entry),
            Decision::Stuck(player) => println!("{} is stuck", player),
            Decision::Ended(_) => break,
            Decision::Waiting(player) => {
                let legal = game
                    .engine()
                    .legal(&state.current_position)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>();
                let mut labels = legal.iter().map(|m| m.to_string()).collect::<Vec<_>>();
                labels.extend([HINT, UNDO, QUIT].map(String::from));
                let choice = Select::new()
                    .with_prompt(format!("{} to move after {}", player, state.current_position))
                    .items(&labels)
                    .default(0)
                    .interact()?;
                match labels[choice].as_str() {
                    HINT => match Selector::new(game.engine(), Difficulty::Hard).suggest(&state.current_position) {
                        Some(suggestion) => println!("{}", suggestion.to_string().cyan()),
                        None => println!("no legal moves"),
                    },
                    UNDO => rewind(game, &mut state),
                    QUIT => state.abandon()?,
                    _ => match arbiter.next_move(&mut state, Some(&legal[choice]))? {
                        Decision::Moved(entry) => println!("{}", entry),
                        other => log::debug!("unexpected decision {:?}", other),
                    },
                }
            }
        }
    }
    println!("{}", state.status.to_string().bold());
    Ok(state)
}

/// take back moves until a manual seat is on turn again
fn rewind(game: &Game, state: &mut GamePlayState) {
    loop {
        match state.undo(game.engine()) {
            Err(e) => return println!("{}", e.to_string().yellow()),
            Ok(entry) if entry.source == Origin::Manual => return,
            Ok(_) => continue,
        }
    }
}

/// write the manual side of a finished game as a strategy
fn save(game: &Game, state: &GamePlayState, path: &PathBuf) -> anyhow::Result<()> {
    let player = match state.mode {
        Mode::PStrategy => Player::O,
        _ => Player::P,
    };
    let strategy = Strategy::from_log(
        format!("{}-{}", game.id(), ludics::now()),
        game.id(),
        game.arena().id(),
        player,
        &state.move_log,
    );
    std::fs::write(path, serde_json::to_string_pretty(&vec![strategy])?)?;
    log::info!("saved {} responses to {}", player, path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let command = Command::parse();
    ludics::log();
    if !matches!(command, Command::Play { .. }) {
        ludics::brb();
    }
    command.run()
}
