use super::*;
use crate::Probability;
use crate::StrategyId;
use crate::arena::Player;
use crate::strategy::Strategies;
use serde::Serialize;

/// One P strategy against one O strategy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pairing {
    pub p_strategy_id: StrategyId,
    pub o_strategy_id: StrategyId,
    pub result: BatchResult,
}

/// A strategy's tally summed over every pairing it took part in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub strategy_id: StrategyId,
    pub player: Player,
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub win_rate: Probability,
    pub loss_rate: Probability,
}

impl Standing {
    fn tally(strategy_id: &str, player: Player, pairings: &[Pairing]) -> Self {
        let total = pairings
            .iter()
            .filter(|pairing| match player {
                Player::P => pairing.p_strategy_id == strategy_id,
                Player::O => pairing.o_strategy_id == strategy_id,
            })
            .map(|pairing| pairing.result)
            .sum::<BatchResult>();
        Self {
            strategy_id: strategy_id.to_string(),
            player,
            games: total.games,
            wins: total.wins(player),
            losses: total.losses(player),
            draws: total.draws,
            win_rate: ratio(total.wins(player), total.games),
            loss_rate: ratio(total.losses(player), total.games),
        }
    }
}

/// Every pairing's batch, and the strategies ranked by how they fared.
///
/// Standings sort by win rate descending, then loss rate ascending, then id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResult {
    pub pairings: Vec<Pairing>,
    pub standings: Vec<Standing>,
    pub cancelled: bool,
}

impl TournamentResult {
    pub fn new(strategies: &Strategies, pairings: Vec<Pairing>, cancelled: bool) -> Self {
        let mut standings = strategies
            .iter()
            .map(|s| Standing::tally(s.id(), s.player(), &pairings))
            .collect::<Vec<_>>();
        standings.sort_by(|a, b| {
            b.win_rate
                .total_cmp(&a.win_rate)
                .then(a.loss_rate.total_cmp(&b.loss_rate))
                .then(a.strategy_id.cmp(&b.strategy_id))
        });
        Self {
            pairings,
            standings,
            cancelled,
        }
    }
    pub fn leader(&self) -> Option<&Standing> {
        self.standings.first()
    }
}
