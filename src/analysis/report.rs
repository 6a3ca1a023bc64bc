use crate::Probability;
use crate::StrategyId;
use crate::arena::Player;
use crate::simulation::BatchResult;
use serde::Serialize;

/// A strategy's results against one fixed opponent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub anomalies: usize,
}

impl Record {
    /// the batch seen from `player`'s seat
    pub fn of(batch: &BatchResult, player: Player) -> Self {
        Self {
            games: batch.games,
            wins: batch.wins(player),
            losses: batch.losses(player),
            draws: batch.draws,
            anomalies: batch.anomalies,
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}W {}L {}D", self.wins, self.losses, self.draws)?;
        if self.anomalies > 0 {
            write!(f, " {}!", self.anomalies)?;
        }
        Ok(())
    }
}

/// How one strategy fares against the AI and against random play.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyReport {
    pub strategy_id: StrategyId,
    pub player: Player,
    /// wins over every game against both opponents
    pub win_rate: Probability,
    /// average length of the games that finished
    pub avg_moves: f32,
    #[serde(rename = "vsAI")]
    pub vs_ai: Record,
    pub vs_random: Record,
}

impl std::fmt::Display for StrategyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} as {}", self.strategy_id, self.player)?;
        writeln!(f, "  win rate   {:.3}", self.win_rate)?;
        writeln!(f, "  avg moves  {:.1}", self.avg_moves)?;
        writeln!(f, "  vs ai      {}", self.vs_ai)?;
        write!(f, "  vs random  {}", self.vs_random)
    }
}

/// The strongest strategy of one seat.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Best {
    pub strategy_id: StrategyId,
    pub win_rate: Probability,
    pub avg_moves: f32,
}

impl From<&StrategyReport> for Best {
    fn from(report: &StrategyReport) -> Self {
        Self {
            strategy_id: report.strategy_id.clone(),
            win_rate: report.win_rate,
            avg_moves: report.avg_moves,
        }
    }
}
