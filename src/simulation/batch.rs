use super::*;
use crate::Probability;
use crate::arena::Player;
use crate::play::Winner;
use serde::Serialize;
use serde::ser::SerializeStruct;

/// Counts over many independent games.
///
/// Addition is associative and commutative, so batches may be reduced in
/// any order. Rates divide by every attempted game, anomalies included;
/// the average length only covers games that finished.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchResult {
    pub games: usize,
    pub p_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    /// runs that failed instead of finishing
    pub anomalies: usize,
    pub total_moves: usize,
    /// stopped early at a cancellation checkpoint
    pub cancelled: bool,
}

impl BatchResult {
    /// a run skipped because the batch was cancelled
    pub fn skipped() -> Self {
        Self {
            cancelled: true,
            ..Self::default()
        }
    }
    pub fn completed(&self) -> usize {
        self.p_wins + self.o_wins + self.draws
    }
    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::P => self.p_wins,
            Player::O => self.o_wins,
        }
    }
    pub fn losses(&self, player: Player) -> usize {
        self.wins(player.other())
    }
    pub fn p_win_rate(&self) -> Probability {
        ratio(self.p_wins, self.games)
    }
    pub fn o_win_rate(&self) -> Probability {
        ratio(self.o_wins, self.games)
    }
    pub fn draw_rate(&self) -> Probability {
        ratio(self.draws, self.games)
    }
    pub fn avg_moves(&self) -> f32 {
        ratio(self.total_moves, self.completed())
    }
}

/// zero rather than NaN on empty batches
pub(crate) fn ratio(n: usize, d: usize) -> f32 {
    match d {
        0 => 0.,
        d => n as f32 / d as f32,
    }
}

impl From<Result<SimulationResult, SimulationError>> for BatchResult {
    fn from(run: Result<SimulationResult, SimulationError>) -> Self {
        match run {
            Err(e) => {
                log::debug!("[simulator] anomalous run: {}", e);
                Self {
                    games: 1,
                    anomalies: 1,
                    ..Self::default()
                }
            }
            Ok(result) => Self {
                games: 1,
                p_wins: (result.winner == Winner::P) as usize,
                o_wins: (result.winner == Winner::O) as usize,
                draws: (result.winner == Winner::Draw) as usize,
                total_moves: result.moves,
                ..Self::default()
            },
        }
    }
}

impl std::ops::Add for BatchResult {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            games: self.games + rhs.games,
            p_wins: self.p_wins + rhs.p_wins,
            o_wins: self.o_wins + rhs.o_wins,
            draws: self.draws + rhs.draws,
            anomalies: self.anomalies + rhs.anomalies,
            total_moves: self.total_moves + rhs.total_moves,
            cancelled: self.cancelled || rhs.cancelled,
        }
    }
}

impl std::iter::Sum for BatchResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, b| a + b)
    }
}

impl Serialize for BatchResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("BatchResult", 11)?;
        s.serialize_field("games", &self.games)?;
        s.serialize_field("pWins", &self.p_wins)?;
        s.serialize_field("oWins", &self.o_wins)?;
        s.serialize_field("draws", &self.draws)?;
        s.serialize_field("anomalies", &self.anomalies)?;
        s.serialize_field("totalMoves", &self.total_moves)?;
        s.serialize_field("pWinRate", &self.p_win_rate())?;
        s.serialize_field("oWinRate", &self.o_win_rate())?;
        s.serialize_field("drawRate", &self.draw_rate())?;
        s.serialize_field("avgMoves", &self.avg_moves())?;
        s.serialize_field("cancelled", &self.cancelled)?;
        s.end()
    }
}

impl std::fmt::Display for BatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games  P {:.3}  O {:.3}  draw {:.3}  avg {:.1} moves",
            self.games,
            self.p_win_rate(),
            self.o_win_rate(),
            self.draw_rate(),
            self.avg_moves()
        )?;
        if self.anomalies > 0 {
            write!(f, "  ({} anomalous)", self.anomalies)?;
        }
        if self.cancelled {
            write!(f, "  (cancelled)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn won(winner: Winner, moves: usize) -> BatchResult {
        BatchResult::from(Ok(SimulationResult {
            winner,
            moves,
            duration: Duration::ZERO,
        }))
    }

    #[test]
    fn sums_are_order_free() {
        let runs = [won(Winner::P, 3), won(Winner::O, 2), won(Winner::Draw, 8), won(Winner::P, 5)];
        let forward = runs.iter().copied().sum::<BatchResult>();
        let backward = runs.iter().rev().copied().sum::<BatchResult>();
        assert_eq!(forward, backward);
        assert_eq!(forward.games, 4);
        assert_eq!(forward.p_wins, 2);
        assert_eq!(forward.p_win_rate(), 0.5);
        assert_eq!(forward.avg_moves(), 4.5);
    }

    #[test]
    fn anomalies_count_but_do_not_poison() {
        let failed = BatchResult::from(Err::<SimulationResult, _>(SimulationError::ManualSeat(Player::O)));
        let batch = failed + failed + won(Winner::O, 4);
        assert_eq!(batch.games, 3);
        assert_eq!(batch.anomalies, 2);
        assert_eq!(batch.completed(), 1);
        assert_eq!(batch.avg_moves(), 4.);
        assert!(failed.p_win_rate().is_finite());
        assert!(BatchResult::default().avg_moves().is_finite());
    }

    #[test]
    fn serializes_rates() {
        let batch = won(Winner::P, 2) + won(Winner::O, 4) + BatchResult::skipped();
        let json = serde_json::to_value(batch).unwrap();
        assert_eq!(json["pWinRate"], serde_json::json!(0.5));
        assert_eq!(json["avgMoves"], serde_json::json!(3.0));
        assert_eq!(json["cancelled"], serde_json::json!(true));
    }
}
