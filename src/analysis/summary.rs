use crate::arena::*;
use serde::Deserialize;
use serde::Serialize;

/// Structural shape of an arena; no play involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArenaSummary {
    pub total_moves: usize,
    /// longest address chain among the moves
    pub max_depth: usize,
    pub p_moves: usize,
    pub o_moves: usize,
    /// mean ramification length, zero for an empty arena
    pub avg_ramification: f32,
    pub initial_moves: usize,
}

impl From<&Arena> for ArenaSummary {
    fn from(arena: &Arena) -> Self {
        let widths = arena.moves().iter().map(|m| m.width()).sum::<usize>();
        Self {
            total_moves: arena.len(),
            max_depth: arena
                .moves()
                .iter()
                .map(|m| m.address().depth())
                .max()
                .unwrap_or(0),
            p_moves: arena.owned(Player::P).count(),
            o_moves: arena.owned(Player::O).count(),
            avg_ramification: match arena.len() {
                0 => 0.,
                n => widths as f32 / n as f32,
            },
            initial_moves: arena.initials().count(),
        }
    }
}

impl std::fmt::Display for ArenaSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "moves          {}", self.total_moves)?;
        writeln!(f, "  P            {}", self.p_moves)?;
        writeln!(f, "  O            {}", self.o_moves)?;
        writeln!(f, "  initial      {}", self.initial_moves)?;
        writeln!(f, "max depth      {}", self.max_depth)?;
        write!(f, "avg branching  {:.3}", self.avg_ramification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_bounds_give_small_shapes() {
        for dense in [false, true] {
            let mut config = ArenaConfig::new("left", "right", 3, 2);
            config.dense = dense;
            let arena = Unfolding::default().build(&config).unwrap();
            let summary = ArenaSummary::from(&arena);
            assert!(summary.max_depth <= 3);
            assert!(summary.avg_ramification <= 2.);
            assert_eq!(summary.p_moves + summary.o_moves, summary.total_moves);
        }
    }

    #[test]
    fn counts_players_and_widths() {
        let summary = ArenaSummary::from(&fixtures::fork());
        assert_eq!(summary.total_moves, 4);
        assert_eq!(summary.p_moves, 2);
        assert_eq!(summary.o_moves, 2);
        assert_eq!(summary.max_depth, 3);
        assert_eq!(summary.avg_ramification, 0.75);
        assert_eq!(summary.initial_moves, 1);
    }

    #[test]
    fn empty_arena_summary_is_finite() {
        let summary = ArenaSummary::from(&Arena::new("empty", vec![]).unwrap());
        assert_eq!(summary.total_moves, 0);
        assert_eq!(summary.avg_ramification, 0.);
    }
}
