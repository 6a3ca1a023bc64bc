use super::*;
use crate::StrategyId;
use crate::arena::Player;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// The strategies registered for one game, indexed by id.
///
/// Iteration follows id order, so every driver that walks the store
/// sees strategies in the same sequence.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Strategies(BTreeMap<StrategyId, Strategy>);

impl Strategies {
    /// register a strategy, returning any earlier one with the same id
    pub fn insert(&mut self, strategy: Strategy) -> Option<Strategy> {
        self.0.insert(strategy.id().to_string(), strategy)
    }
    pub fn remove(&mut self, id: &str) -> Option<Strategy> {
        self.0.remove(id)
    }
    pub fn get(&self, id: &str) -> Option<&Strategy> {
        self.0.get(id)
    }
    pub fn of(&self, player: Player) -> impl Iterator<Item = &Strategy> {
        self.0.values().filter(move |s| s.player() == player)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Strategy> {
        self.0.values()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Strategy> for Strategies {
    fn from_iter<I: IntoIterator<Item = Strategy>>(iter: I) -> Self {
        Self(iter.into_iter().map(|s| (s.id().to_string(), s)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_player_in_id_order() {
        let store = [
            Strategy::new("z", "g", "d", Player::P),
            Strategy::new("a", "g", "d", Player::P),
            Strategy::new("m", "g", "d", Player::O),
        ]
        .into_iter()
        .collect::<Strategies>();
        let ps = store.of(Player::P).map(|s| s.id()).collect::<Vec<_>>();
        assert_eq!(ps, vec!["a", "z"]);
        assert_eq!(store.of(Player::O).count(), 1);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn insert_replaces_same_id() {
        let mut store = Strategies::default();
        assert!(store.insert(Strategy::new("s", "g", "d", Player::P)).is_none());
        assert!(store.insert(Strategy::new("s", "g", "d", Player::O)).is_some());
        assert_eq!(store.get("s").map(|s| s.player()), Some(Player::O));
    }
}
