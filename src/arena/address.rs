use serde::Deserialize;
use serde::Serialize;

/// Dot-separated path locating a move in the game tree, e.g. `0.2.1`.
///
/// The last segment names the branch of the parent's ramification this
/// address occupies. Addresses are unique within an arena.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    const SEPARATOR: char = '.';

    /// a top-level address for an initial move
    pub fn root(branch: usize) -> Self {
        Self(branch.to_string())
    }
    pub fn child(&self, branch: usize) -> Self {
        if self.0.is_empty() {
            Self::root(branch)
        } else {
            Self(format!("{}{}{}", self.0, Self::SEPARATOR, branch))
        }
    }
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rsplit_once(Self::SEPARATOR)
            .map(|(parent, _)| Self(parent.to_string()))
    }
    /// branch index within the parent's ramification, if numeric
    pub fn branch(&self) -> Option<usize> {
        self.0
            .rsplit(Self::SEPARATOR)
            .next()
            .and_then(|last| last.parse::<usize>().ok())
    }
    /// number of segments; top-level addresses have depth 1
    pub fn depth(&self) -> usize {
        if self.0.is_empty() {
            0
        } else {
            self.0.split(Self::SEPARATOR).count()
        }
    }
    pub fn is_parent_of(&self, other: &Self) -> bool {
        other.parent().as_ref() == Some(self)
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self(s.trim().to_string())
    }
}
impl From<String> for Address {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}
impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
