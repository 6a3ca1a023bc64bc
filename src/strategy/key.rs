use crate::arena::Address;
use crate::play::Position;
use serde::Deserialize;
use serde::Serialize;

/// Canonical key of a position: its played addresses, in order, joined by `;`.
///
/// The empty position has the empty key.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    const SEPARATOR: &'static str = ";";

    /// number of plies this key describes
    pub fn len(&self) -> usize {
        match self.0.is_empty() {
            true => 0,
            false => self.0.split(Self::SEPARATOR).count(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&[Address]> for Key {
    fn from(addresses: &[Address]) -> Self {
        Self(
            addresses
                .iter()
                .map(|a| a.as_str())
                .collect::<Vec<_>>()
                .join(Self::SEPARATOR),
        )
    }
}

impl From<&Position> for Key {
    fn from(position: &Position) -> Self {
        Self::from(position.addresses().as_slice())
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_join_addresses() {
        let addresses = [Address::from("0"), Address::from("0.1"), Address::from("0.1.0")];
        let key = Key::from(&addresses[..]);
        assert_eq!(key.as_str(), "0;0.1;0.1.0");
        assert_eq!(key.len(), 3);
    }

    #[test]
    fn empty_position_has_empty_key() {
        let key = Key::from(&Position::default());
        assert!(key.is_empty());
        assert_eq!(key.len(), 0);
    }
}
