use super::*;
use crate::BehaviourId;
use crate::GameId;
use crate::StrategyId;
use crate::arena::*;
use crate::play::*;
use crate::session::LogEntry;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// A deterministic policy for one player of one game.
///
/// Lookups are pure: the same position always yields the same response,
/// and a position with no entry leaves the strategy silent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    id: StrategyId,
    game_id: GameId,
    source_design_id: BehaviourId,
    player: Player,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    response_map: BTreeMap<Key, Response>,
}

impl Strategy {
    pub fn new(
        id: impl Into<StrategyId>,
        game_id: impl Into<GameId>,
        source_design_id: impl Into<BehaviourId>,
        player: Player,
    ) -> Self {
        Self {
            id: id.into(),
            game_id: game_id.into(),
            source_design_id: source_design_id.into(),
            player,
            name: None,
            response_map: BTreeMap::new(),
        }
    }
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn game_id(&self) -> &str {
        &self.game_id
    }
    pub fn source_design_id(&self) -> &str {
        &self.source_design_id
    }
    pub fn player(&self) -> Player {
        self.player
    }
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn responses(&self) -> &BTreeMap<Key, Response> {
        &self.response_map
    }
    pub fn len(&self) -> usize {
        self.response_map.len()
    }
    pub fn is_empty(&self) -> bool {
        self.response_map.is_empty()
    }

    /// the response recorded for this position, if any and if it is our turn
    pub fn respond(&self, position: &Position) -> Option<&Response> {
        if position.current() != self.player {
            return None;
        }
        self.response_map.get(&Key::from(position))
    }
    /// the arena move this strategy plays here, or silence
    ///
    /// Responses that do not resolve to one of our own arena moves are
    /// treated as silence rather than invented.
    pub fn play<'a>(&self, arena: &'a Arena, position: &Position) -> Option<&'a ArenaMove> {
        self.respond(position)
            .and_then(|r| arena.get(&r.address).filter(|m| r.names(m)))
            .filter(|m| m.player() == self.player)
    }
    /// record `m` as the reply at `position`, replacing any earlier entry
    pub fn learn(&mut self, position: &Position, m: &ArenaMove) -> Result<(), StrategyError> {
        if m.player() != self.player {
            return Err(StrategyError::Foreign(m.address().clone()));
        }
        if position.current() != self.player {
            return Err(StrategyError::OutOfTurn(Key::from(position)));
        }
        self.response_map.insert(Key::from(position), Response::from(m));
        Ok(())
    }
    /// learn every reply our player made along a play
    pub fn record(&mut self, sequence: &[ArenaMove]) {
        let mut addresses = Vec::with_capacity(sequence.len());
        for m in sequence {
            if m.player() == self.player {
                self.response_map
                    .insert(Key::from(addresses.as_slice()), Response::from(m));
            }
            addresses.push(m.address().clone());
        }
    }
    /// derive a strategy from the moves a session logged
    pub fn from_log(
        id: impl Into<StrategyId>,
        game_id: impl Into<GameId>,
        source_design_id: impl Into<BehaviourId>,
        player: Player,
        log: &[LogEntry],
    ) -> Self {
        let sequence = log.iter().map(|e| e.choice.clone()).collect::<Vec<_>>();
        let mut strategy = Self::new(id, game_id, source_design_id, player);
        strategy.record(&sequence);
        strategy
    }
    /// check every response against the arena and our seat
    pub fn validate(&self, arena: &Arena) -> Result<(), StrategyError> {
        for (key, response) in self.response_map.iter() {
            if Player::at(key.len()) != self.player {
                return Err(StrategyError::OutOfTurn(key.clone()));
            }
            match arena.get(&response.address) {
                None => return Err(StrategyError::Missing(response.address.clone())),
                Some(m) if m.player() != self.player => {
                    return Err(StrategyError::Foreign(response.address.clone()));
                }
                Some(m) if !response.names(m) => {
                    return Err(StrategyError::Missing(response.address.clone()));
                }
                Some(_) => continue,
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({}, {})", self.id, name, self.player),
            None => write!(f, "{} ({})", self.id, self.player),
        }
    }
}
