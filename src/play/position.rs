use crate::arena::*;
use serde::Deserialize;
use serde::Serialize;

/// A play in progress: the alternating, non-repeating sequence of moves so far.
///
/// Positions are only extended through [`super::Engine::apply`], which keeps
/// alternation, uniqueness and the terminal flag consistent.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    sequence: Vec<ArenaMove>,
    is_terminal: bool,
}

impl Position {
    pub fn sequence(&self) -> &[ArenaMove] {
        &self.sequence
    }
    pub fn len(&self) -> usize {
        self.sequence.len()
    }
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }
    pub fn last(&self) -> Option<&ArenaMove> {
        self.sequence.last()
    }
    /// P on the empty position, otherwise the opposite of the last mover
    pub fn current(&self) -> Player {
        self.last()
            .map(|m| m.player().other())
            .unwrap_or(Player::P)
    }
    pub fn contains(&self, address: &Address) -> bool {
        self.sequence.iter().any(|m| m.address() == address)
    }
    pub fn addresses(&self) -> Vec<Address> {
        self.sequence.iter().map(|m| m.address().clone()).collect()
    }
    /// unchecked extension, for search and for the engine
    pub(crate) fn with(&self, m: &ArenaMove) -> Self {
        let mut child = self.clone();
        child.sequence.push(m.clone());
        child.is_terminal = false;
        child
    }
    pub(crate) fn conclude(mut self, terminal: bool) -> Self {
        self.is_terminal = terminal;
        self
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "(empty)");
        }
        let line = self
            .sequence
            .iter()
            .map(|m| format!("{}:{}", m.player(), m.address()))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", line)
    }
}
