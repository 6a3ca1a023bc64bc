use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Turns a pair of behaviours into an arena.
///
/// How moves are derived from the behaviours is up to the implementation;
/// the contract is the shape guarantee: at most `config.bound()` moves, no
/// address deeper than `max_depth`, no ramification wider than
/// `max_ramification`, and never more moves than the ceiling.
pub trait ArenaBuilder: Send + Sync {
    fn build(&self, config: &ArenaConfig) -> Result<Arena, ArenaError>;
}

/// Deterministic builder that unfolds a tree from a single initial move.
///
/// Widths are drawn from an rng seeded by the behaviour pair, so the same
/// config always yields the same arena. Moves at odd depth belong to P and
/// moves at even depth to O.
#[derive(Debug, Clone, Copy)]
pub struct Unfolding {
    ceiling: usize,
}

impl Default for Unfolding {
    fn default() -> Self {
        Self {
            ceiling: crate::ARENA_CEILING,
        }
    }
}

impl Unfolding {
    pub fn with_ceiling(ceiling: usize) -> Self {
        Self { ceiling }
    }
    pub fn ceiling(&self) -> usize {
        self.ceiling
    }
    /// preorder walk with an explicit stack; widths are drawn in visit order
    fn unfold(&self, config: &ArenaConfig, rng: &mut SmallRng) -> Vec<ArenaMove> {
        let mut moves = Vec::new();
        let mut pending = vec![(Address::root(0), Player::P)];
        while let Some((address, player)) = pending.pop() {
            let depth = address.depth();
            let width = if depth >= config.max_depth {
                0
            } else if config.dense || depth == 1 {
                config.max_ramification
            } else {
                rng.random_range(0..=config.max_ramification)
            };
            let ramification = (0..width).collect::<Vec<usize>>();
            pending.extend(
                ramification
                    .iter()
                    .rev()
                    .map(|&branch| (address.child(branch), player.other())),
            );
            let id = format!("m{}", moves.len());
            moves.push(ArenaMove::new(id, address, ramification, player, depth == 1));
        }
        moves
    }
}

impl ArenaBuilder for Unfolding {
    fn build(&self, config: &ArenaConfig) -> Result<Arena, ArenaError> {
        let bound = config.bound();
        if bound > self.ceiling {
            log::warn!("[arena] {} admits {} moves, refusing", config.id(), bound);
            return Err(ArenaError::TooLarge {
                bound,
                ceiling: self.ceiling,
            });
        }
        let moves = match config.max_depth > 0 && config.max_ramification > 0 {
            true => self.unfold(config, &mut SmallRng::seed_from_u64(config.seed())),
            false => Vec::new(),
        };
        log::debug!("[arena] built {} with {} moves", config.id(), moves.len());
        Arena::new(config.id(), moves)
    }
}
