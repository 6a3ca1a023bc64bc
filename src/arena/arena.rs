use super::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;

/// Immutable container of every admissible move of a game.
///
/// Built once per game and never mutated afterwards. Moves keep their
/// construction order, which is also the order legal moves are reported in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "Layout", try_from = "Layout")]
pub struct Arena {
    id: String,
    moves: Vec<ArenaMove>,
    index: HashMap<Address, usize>,
}

impl Arena {
    pub fn new(id: impl Into<String>, moves: Vec<ArenaMove>) -> Result<Self, ArenaError> {
        let mut index = HashMap::with_capacity(moves.len());
        for (i, m) in moves.iter().enumerate() {
            if index.insert(m.address().clone(), i).is_some() {
                return Err(ArenaError::DuplicateAddress(m.address().clone()));
            }
        }
        let arena = Self {
            id: id.into(),
            moves,
            index,
        };
        arena
            .orphans()
            .for_each(|m| log::debug!("[arena] {} is not opened by any move", m.address()));
        Ok(arena)
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn moves(&self) -> &[ArenaMove] {
        &self.moves
    }
    pub fn len(&self) -> usize {
        self.moves.len()
    }
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
    pub fn get(&self, address: &Address) -> Option<&ArenaMove> {
        self.index.get(address).map(|i| &self.moves[*i])
    }
    pub fn contains(&self, m: &ArenaMove) -> bool {
        self.get(m.address()) == Some(m)
    }
    pub fn initials(&self) -> impl Iterator<Item = &ArenaMove> {
        self.moves.iter().filter(|m| m.is_initial())
    }
    pub fn owned(&self, player: Player) -> impl Iterator<Item = &ArenaMove> {
        self.moves.iter().filter(move |m| m.player() == player)
    }
    /// opponent moves sitting on the branches opened by `m`
    pub fn children<'a>(&'a self, m: &'a ArenaMove) -> impl Iterator<Item = &'a ArenaMove> {
        m.ramification()
            .iter()
            .map(move |b| m.address().child(*b))
            .filter_map(move |a| self.get(&a))
            .filter(move |c| c.player() == m.player().other())
    }
    /// non-initial moves no earlier opposite-player move opens
    pub fn orphans(&self) -> impl Iterator<Item = &ArenaMove> {
        self.moves
            .iter()
            .filter(|m| !m.is_initial())
            .filter(move |m| {
                m.address()
                    .parent()
                    .and_then(|p| self.get(&p))
                    .map_or(true, |p| p.player() == m.player() || !p.opens(m.address()))
            })
    }
}

impl crate::Arbitrary for Arena {
    fn random() -> Self {
        let config = ArenaConfig::new(
            format!("{:x}", rand::random::<u32>()),
            format!("{:x}", rand::random::<u32>()),
            4,
            3,
        );
        Unfolding::default()
            .build(&config)
            .expect("small bounds fit under the ceiling")
    }
}

/// Serialized form of an arena; the address index is rebuilt on load.
#[derive(Serialize, Deserialize)]
struct Layout {
    id: String,
    moves: Vec<ArenaMove>,
}

impl From<Arena> for Layout {
    fn from(arena: Arena) -> Self {
        Self {
            id: arena.id,
            moves: arena.moves,
        }
    }
}

impl TryFrom<Layout> for Arena {
    type Error = ArenaError;
    fn try_from(layout: Layout) -> Result<Self, Self::Error> {
        Self::new(layout.id, layout.moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn rejects_duplicate_addresses() {
        let moves = vec![
            ArenaMove::new("a", "0", vec![0], Player::P, true),
            ArenaMove::new("b", "0", vec![], Player::P, true),
        ];
        assert_eq!(
            Arena::new("dup", moves).unwrap_err(),
            ArenaError::DuplicateAddress(Address::from("0"))
        );
    }

    #[test]
    fn lookup_by_address() {
        let arena = fixtures::single();
        let reply = arena.get(&Address::from("0.0")).unwrap();
        assert_eq!(reply.player(), Player::O);
        assert!(arena.get(&Address::from("0.1")).is_none());
        assert!(arena.contains(reply));
    }

    #[test]
    fn children_follow_ramification() {
        let arena = fixtures::fork();
        let root = arena.get(&Address::from("0")).unwrap();
        let children = arena.children(root).map(|m| m.id()).collect::<Vec<_>>();
        assert_eq!(children, vec!["o0", "o1"]);
    }

    #[test]
    fn orphans_are_detected() {
        let moves = vec![
            ArenaMove::new("a", "0", vec![0], Player::P, true),
            ArenaMove::new("b", "0.0", vec![], Player::O, false),
            ArenaMove::new("c", "0.1", vec![], Player::O, false),
        ];
        let arena = Arena::new("orphan", moves).unwrap();
        let orphans = arena.orphans().map(|m| m.id()).collect::<Vec<_>>();
        assert_eq!(orphans, vec!["c"]);
        assert_eq!(fixtures::fork().orphans().count(), 0);
    }

    #[test]
    fn serde_rebuilds_index() {
        let arena = Arena::random();
        let json = serde_json::to_string(&arena).unwrap();
        let back = serde_json::from_str::<Arena>(&json).unwrap();
        assert_eq!(back.moves(), arena.moves());
        assert!(back.moves().iter().all(|m| back.get(m.address()) == Some(m)));
    }

    #[test]
    fn serde_rejects_duplicates() {
        let json = r#"{"id":"x","moves":[
            {"id":"a","address":"0","ramification":[],"player":"P","isInitial":true},
            {"id":"b","address":"0","ramification":[],"player":"P","isInitial":true}]}"#;
        assert!(serde_json::from_str::<Arena>(json).is_err());
    }
}
