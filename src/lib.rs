//! Two-player game engine over ludics arenas.
//!
//! A pair of orthogonal behaviours yields an [`arena::Arena`]: the finite set of
//! moves a Proponent and an Opponent may play. This crate turns that arena into
//! a playable, simulatable and analyzable game.
//!
//! ## Modules
//!
//! - [`arena`]: static move set, addresses, players, arena construction
//! - [`play`]: positions, legality rules, the play engine and verdicts
//! - [`strategy`]: deterministic player-scoped policies and their store
//! - [`ai`]: heuristic move suggestion at tunable difficulty
//! - [`session`]: game sessions, move sources and the move arbiter
//! - [`simulation`]: single games, batches and round-robin tournaments
//! - [`analysis`]: strategy win rates and arena shape summaries
//! - [`api`]: request/response payloads and the stateless service
//! - `hosting`: HTTP transport and per-game session registry (feature `server`)
pub mod ai;
pub mod analysis;
pub mod api;
pub mod arena;
#[cfg(feature = "server")]
pub mod hosting;
pub mod play;
pub mod session;
pub mod simulation;
pub mod strategy;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Opaque identifier of a registered game.
pub type GameId = String;
/// Opaque identifier of a registered strategy.
pub type StrategyId = String;
/// Opaque identifier of a source behaviour or design.
pub type BehaviourId = String;
/// Heuristic evaluations from the mover's point of view.
pub type Score = f32;
/// Win, loss and draw rates.
pub type Probability = f32;
/// Milliseconds since the unix epoch.
pub type Millis = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// ARENA CONSTRUCTION
// ============================================================================
/// Hard ceiling on the number of moves a single arena may hold.
pub const ARENA_CEILING: usize = 10_000;
/// Default maximum number of alternations in a built arena.
pub const DEFAULT_MAX_DEPTH: usize = 6;
/// Default maximum number of branches opened by a single move.
pub const DEFAULT_MAX_RAMIFICATION: usize = 3;

// ============================================================================
// PLAY ENGINE
// ============================================================================
/// Default ply limit; reaching it ends the game in a draw.
pub const DEFAULT_PLY_LIMIT: usize = 64;

// ============================================================================
// AI MOVE SELECTION
// Negamax lookahead with alpha-beta pruning; width is only a tie-break.
// ============================================================================
/// Lookahead in plies at easy difficulty.
pub const EASY_LOOKAHEAD: usize = 1;
/// Lookahead in plies at medium difficulty.
pub const MEDIUM_LOOKAHEAD: usize = 3;
/// Deepest hard search in plies; keeps recursion shallow on long arenas.
pub const HARD_LOOKAHEAD: usize = 256;
/// Maximum nodes expanded by a single hard search before falling back to static evaluation.
pub const HARD_NODE_BUDGET: usize = 1 << 16;
/// Magnitude of the bounded noise injected into easy evaluations.
pub const EASY_NOISE: Score = 0.25;
/// Weight of the ramification width term relative to lookahead value.
pub const WIDTH_WEIGHT: Score = 0.001;
/// Value of a won terminal position before the distance discount.
pub const WIN_VALUE: Score = 1.0;
/// Value of a win reached on the last allowed ply; every decided value lies above it.
pub const WIN_FLOOR: Score = 0.5;

// ============================================================================
// SIMULATION & ANALYSIS
// ============================================================================
/// Games per batch when the caller does not say.
pub const DEFAULT_GAME_COUNT: usize = 100;
/// Seed for batches that ask for reproducibility without naming a seed.
pub const DEFAULT_SEED: u64 = 0x5EED;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Milliseconds since the unix epoch, saturating at zero on clock skew.
pub fn now() -> Millis {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as Millis)
        .unwrap_or_default()
}

/// Directory the log files of every run are written to.
#[cfg(feature = "server")]
const LOG_DIR: &str = "logs";

/// Send INFO and above to the terminal and the full DEBUG trail of this run
/// to `logs/<unix-seconds>.log`. Call once, first thing in a binary.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all(LOG_DIR).expect("create log directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let path = format!("{}/{}.log", LOG_DIR, now() / 1000);
    let file = std::fs::File::create(&path).expect("create log file");
    simplelog::CombinedLogger::init(vec![
        simplelog::TermLogger::new(
            log::LevelFilter::Info,
            config.clone(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(log::LevelFilter::Debug, config, file),
    ])
    .expect("install logger");
}

/// Set once a long batch or tournament should wind down.
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
/// Wall-clock cutoff for simulations, from SIMULATION_DURATION.
static DEADLINE: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();

/// Whether simulations should stop before their next game.
///
/// Batches and tournaments poll this between games, so a game in flight
/// always finishes and partial results come back flagged as cancelled.
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
        || DEADLINE.get().is_some_and(|d| std::time::Instant::now() >= *d)
}

/// Arm the simulation cutoffs: a SIMULATION_DURATION deadline if one is set,
/// and a watcher that stops batches when "Q" is entered on stdin.
///
/// The watcher owns stdin, so interactive play must not call this.
pub fn brb() {
    if let Some(limit) = std::env::var("SIMULATION_DURATION")
        .ok()
        .as_deref()
        .and_then(parse_duration)
    {
        let _ = DEADLINE.set(std::time::Instant::now() + limit);
        log::info!("simulations stop after {:?}", limit);
    }
    std::thread::spawn(|| {
        for line in std::io::stdin().lines().map_while(Result::ok) {
            if line.trim().eq_ignore_ascii_case("q") {
                log::warn!("stopping simulations after the games in flight");
                INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
                break;
            }
        }
    });
}

/// `30s`, `5m`, `2h` or `1d`.
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (count, unit) = s.split_at(s.char_indices().last().map_or(0, |(i, _)| i));
    let seconds = match unit {
        "s" => 1,
        "m" => 60,
        "h" => 3600,
        "d" => 86400,
        _ => return None,
    };
    count
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_mul(seconds))
        .map(std::time::Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_parse() {
        assert_eq!(parse_duration("30s"), Some(std::time::Duration::from_secs(30)));
        assert_eq!(parse_duration("5m"), Some(std::time::Duration::from_secs(300)));
        assert_eq!(parse_duration("2h"), Some(std::time::Duration::from_secs(7200)));
        assert_eq!(parse_duration("2x"), None);
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("5µ"), None);
        assert_eq!(parse_duration("18446744073709551615d"), None);
    }

    #[test]
    fn not_interrupted_by_default() {
        assert!(!interrupted());
    }
}
