use crate::arena::*;
use serde::Deserialize;
use serde::Serialize;

/// The move a strategy plays at some position, named by address and ramification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Response {
    pub address: Address,
    #[serde(default)]
    pub ramification: Vec<usize>,
}

impl Response {
    /// whether `m` is the arena move this response names
    pub fn names(&self, m: &ArenaMove) -> bool {
        m.address() == &self.address && m.ramification() == self.ramification.as_slice()
    }
}

impl From<&ArenaMove> for Response {
    fn from(m: &ArenaMove) -> Self {
        Self {
            address: m.address().clone(),
            ramification: m.ramification().to_vec(),
        }
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.address, self.ramification)
    }
}
