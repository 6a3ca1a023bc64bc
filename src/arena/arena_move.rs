use super::*;
use serde::Deserialize;
use serde::Serialize;

/// An admissible move in the game tree.
///
/// Each move belongs to one player, sits at a unique address, and opens a
/// ramification: the branch indices available to the opponent's reply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArenaMove {
    id: String,
    address: Address,
    ramification: Vec<usize>,
    player: Player,
    is_initial: bool,
}

impl ArenaMove {
    pub fn new(
        id: impl Into<String>,
        address: impl Into<Address>,
        ramification: Vec<usize>,
        player: Player,
        is_initial: bool,
    ) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            ramification,
            player,
            is_initial,
        }
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn address(&self) -> &Address {
        &self.address
    }
    pub fn ramification(&self) -> &[usize] {
        &self.ramification
    }
    pub fn player(&self) -> Player {
        self.player
    }
    pub fn is_initial(&self) -> bool {
        self.is_initial
    }
    /// local branching factor
    pub fn width(&self) -> usize {
        self.ramification.len()
    }
    /// whether `address` sits on one of the branches this move opens
    pub fn opens(&self, address: &Address) -> bool {
        self.address.is_parent_of(address)
            && address
                .branch()
                .map_or(false, |b| self.ramification.contains(&b))
    }
}

impl std::fmt::Display for ArenaMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {:?}", self.player, self.address, self.ramification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_only_listed_branches() {
        let m = ArenaMove::new("m", "0", vec![0, 2], Player::P, true);
        assert!(m.opens(&Address::from("0.0")));
        assert!(m.opens(&Address::from("0.2")));
        assert!(!m.opens(&Address::from("0.1")));
        assert!(!m.opens(&Address::from("0.0.0")));
        assert!(!m.opens(&Address::from("1.0")));
        assert_eq!(m.width(), 2);
    }

    #[test]
    fn serializes_camel_case() {
        let m = ArenaMove::new("m0", "0", vec![0], Player::P, true);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["isInitial"], serde_json::json!(true));
        assert_eq!(json["address"], serde_json::json!("0"));
        assert_eq!(json["player"], serde_json::json!("P"));
    }
}
