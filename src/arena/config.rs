use crate::BehaviourId;
use serde::Deserialize;
use serde::Serialize;

/// Which behaviours an arena is built from, and how large it may grow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArenaConfig {
    pub positive: BehaviourId,
    pub negative: BehaviourId,
    /// maximum alternations along any branch
    pub max_depth: usize,
    /// maximum branches any single move opens
    pub max_ramification: usize,
    /// open every branch up to the bounds instead of sampling widths
    pub dense: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            positive: BehaviourId::from("positive"),
            negative: BehaviourId::from("negative"),
            max_depth: crate::DEFAULT_MAX_DEPTH,
            max_ramification: crate::DEFAULT_MAX_RAMIFICATION,
            dense: false,
        }
    }
}

impl ArenaConfig {
    pub fn new(
        positive: impl Into<BehaviourId>,
        negative: impl Into<BehaviourId>,
        max_depth: usize,
        max_ramification: usize,
    ) -> Self {
        Self {
            positive: positive.into(),
            negative: negative.into(),
            max_depth,
            max_ramification,
            dense: false,
        }
    }
    pub fn dense(mut self) -> Self {
        self.dense = true;
        self
    }
    /// arena id derived from the two behaviours
    pub fn id(&self) -> String {
        format!("{}/{}", self.positive, self.negative)
    }
    /// Σ_{d=1..maxDepth} maxRamification^d, saturating
    pub fn bound(&self) -> usize {
        match self.max_ramification {
            0 => 0,
            1 => self.max_depth,
            r => (1..=self.max_depth)
                .try_fold((0usize, 1usize), |(sum, power), _| -> Result<_, usize> {
                    let power = power.checked_mul(r).ok_or(usize::MAX)?;
                    let sum = sum.checked_add(power).ok_or(usize::MAX)?;
                    Ok((sum, power))
                })
                .map_or_else(|saturated| saturated, |(sum, _)| sum),
        }
    }
    /// stable FNV-1a digest of the behaviour pair, used to seed construction
    pub fn seed(&self) -> u64 {
        self.positive
            .bytes()
            .chain(std::iter::once(0))
            .chain(self.negative.bytes())
            .fold(0xcbf29ce484222325u64, |hash, byte| {
                (hash ^ byte as u64).wrapping_mul(0x100000001b3)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_sums_powers() {
        assert_eq!(ArenaConfig::new("a", "b", 3, 2).bound(), 2 + 4 + 8);
        assert_eq!(ArenaConfig::new("a", "b", 0, 5).bound(), 0);
        assert_eq!(ArenaConfig::new("a", "b", 64, 64).bound(), usize::MAX);
    }

    #[test]
    fn seed_depends_on_order() {
        let ab = ArenaConfig::new("a", "b", 3, 2);
        let ba = ArenaConfig::new("b", "a", 3, 2);
        assert_eq!(ab.seed(), ab.clone().seed());
        assert_ne!(ab.seed(), ba.seed());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = serde_json::from_str::<ArenaConfig>(r#"{"maxDepth": 2}"#).unwrap();
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.max_ramification, crate::DEFAULT_MAX_RAMIFICATION);
        assert!(!config.dense);
    }
}
