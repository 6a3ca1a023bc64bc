use super::*;
use crate::arena::*;
use std::sync::Arc;

/// The play engine: legality, transitions and termination over one arena.
///
/// Engines are cheap to clone; the arena is shared and never mutated.
#[derive(Debug, Clone)]
pub struct Engine {
    arena: Arc<Arena>,
    rules: Rules,
}

impl Engine {
    pub fn new(arena: impl Into<Arc<Arena>>, rules: Rules) -> Self {
        Self {
            arena: arena.into(),
            rules,
        }
    }
    pub fn arena(&self) -> &Arena {
        &self.arena
    }
    pub fn shared(&self) -> Arc<Arena> {
        self.arena.clone()
    }
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// the starting position, already terminal if P has no opening move
    pub fn root(&self) -> Position {
        let root = Position::default();
        let terminal = self.is_terminal(&root);
        root.conclude(terminal)
    }
    /// every unplayed move of the player on turn that the legality rule admits
    pub fn legal(&self, position: &Position) -> Vec<&ArenaMove> {
        let player = position.current();
        self.arena
            .owned(player)
            .filter(|m| !position.contains(m.address()))
            .filter(|m| self.rules.legality.admits(position, m))
            .collect()
    }
    pub fn is_allowed(&self, position: &Position, m: &ArenaMove) -> bool {
        self.check(position, m).is_ok()
    }
    pub fn check(&self, position: &Position, m: &ArenaMove) -> Result<(), IllegalMove> {
        let refuse = |reason| Err(IllegalMove::new(m.address().clone(), reason));
        if position.is_terminal() || position.len() >= self.rules.ply_limit {
            return refuse(Reason::Finished);
        }
        if m.player() != position.current() {
            return refuse(Reason::WrongPlayer {
                expected: position.current(),
                found: m.player(),
            });
        }
        if position.contains(m.address()) {
            return refuse(Reason::Replayed);
        }
        if !self.arena.contains(m) {
            return refuse(Reason::Unknown);
        }
        if !self.rules.legality.admits(position, m) {
            return match position.is_empty() {
                true => refuse(Reason::NotInitial),
                false => refuse(Reason::Unopened),
            };
        }
        Ok(())
    }
    /// extend the position by one move, or explain why not
    pub fn apply(&self, position: &Position, m: &ArenaMove) -> Result<Position, IllegalMove> {
        self.check(position, m)?;
        let child = position.with(m);
        let terminal = self.is_terminal(&child);
        log::trace!("[engine] {} -> {}", m, child);
        Ok(child.conclude(terminal))
    }
    pub fn is_terminal(&self, position: &Position) -> bool {
        position.len() >= self.rules.ply_limit || self.legal(position).is_empty()
    }
    /// who won, once the position is terminal
    ///
    /// Running out of moves takes precedence over the ply limit: a mover
    /// with no legal move loses even on the last allowed ply.
    pub fn verdict(&self, position: &Position) -> Option<Winner> {
        if self.legal(position).is_empty() {
            Some(Winner::from(position.current().other()))
        } else if position.len() >= self.rules.ply_limit {
            Some(Winner::Draw)
        } else {
            None
        }
    }
    /// the arena's move at `address`
    pub fn resolve(&self, address: &Address) -> Result<&ArenaMove, IllegalMove> {
        self.arena
            .get(address)
            .ok_or_else(|| IllegalMove::new(address.clone(), Reason::Unknown))
    }
    /// rebuild a position from its addresses, checking every step
    pub fn restore(&self, addresses: &[Address]) -> Result<Position, IllegalMove> {
        addresses.iter().try_fold(self.root(), |position, address| {
            self.resolve(address)
                .and_then(|m| self.apply(&position, m))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use rand::seq::IndexedRandom;

    fn addr(s: &str) -> Address {
        Address::from(s)
    }

    #[test]
    fn single_reply_arena_plays_out() {
        let engine = Engine::new(fixtures::single(), Rules::default());
        let root = engine.root();
        let legal = engine.legal(&root);
        assert_eq!(legal.len(), 1);
        assert_eq!(legal[0].address(), &addr("0"));
        let m0 = legal[0].clone();
        let after = engine.apply(&root, &m0).unwrap();
        assert_eq!(after.current(), Player::O);
        assert!(!after.is_terminal());
        let replies = engine.legal(&after);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].address(), &addr("0.0"));
        let m1 = replies[0].clone();
        let end = engine.apply(&after, &m1).unwrap();
        assert!(end.is_terminal());
        assert_eq!(end.current(), Player::P);
        assert_eq!(engine.verdict(&end), Some(Winner::O));
    }

    #[test]
    fn rejections_leave_position_untouched() {
        let engine = Engine::new(fixtures::fork(), Rules::default());
        let root = engine.root();
        let reply = engine.resolve(&addr("0.0")).unwrap().clone();
        let err = engine.apply(&root, &reply).unwrap_err();
        assert_eq!(
            err.reason,
            Reason::WrongPlayer {
                expected: Player::P,
                found: Player::O
            }
        );
        assert!(root.is_empty());
        let late = engine.resolve(&addr("0.0.0")).unwrap().clone();
        assert_eq!(engine.apply(&root, &late).unwrap_err().reason, Reason::NotInitial);
    }

    #[test]
    fn replays_are_refused() {
        let engine = Engine::new(fixtures::choice(), Rules::default());
        let a = engine.resolve(&addr("0")).unwrap().clone();
        let b0 = engine.resolve(&addr("1.0")).unwrap().clone();
        let position = engine.apply(&engine.root(), &a).unwrap();
        let position = engine.apply(&position, &b0).unwrap();
        assert_eq!(engine.apply(&position, &a).unwrap_err().reason, Reason::Replayed);
    }

    #[test]
    fn unknown_moves_are_refused() {
        let engine = Engine::new(fixtures::single(), Rules::default());
        let forged = ArenaMove::new("x", "0", vec![0, 1], Player::P, true);
        assert_eq!(
            engine.apply(&engine.root(), &forged).unwrap_err().reason,
            Reason::Unknown
        );
        assert_eq!(engine.resolve(&addr("9")).unwrap_err().reason, Reason::Unknown);
    }

    #[test]
    fn ramified_rule_rejects_unopened_moves() {
        let engine = Engine::new(fixtures::fork(), Rules::ramified());
        let position = engine.restore(&[addr("0"), addr("0.1")]).unwrap();
        assert!(position.is_terminal());
        assert_eq!(engine.verdict(&position), Some(Winner::O));
        let permissive = Engine::new(fixtures::fork(), Rules::default());
        let position = permissive.restore(&[addr("0"), addr("0.1")]).unwrap();
        assert!(!position.is_terminal());
        assert_eq!(permissive.legal(&position).len(), 1);
    }

    #[test]
    fn ply_limit_draws() {
        let engine = Engine::new(fixtures::tree(6, 2), Rules::ramified().with_ply_limit(2));
        let position = engine.restore(&[addr("0"), addr("0.1")]).unwrap();
        assert!(position.is_terminal());
        assert_eq!(engine.verdict(&position), Some(Winner::Draw));
        let next = engine.resolve(&addr("0.1.0")).unwrap().clone();
        assert_eq!(engine.apply(&position, &next).unwrap_err().reason, Reason::Finished);
    }

    #[test]
    fn empty_arena_is_lost_for_proponent() {
        let engine = Engine::new(Arena::new("empty", vec![]).unwrap(), Rules::default());
        let root = engine.root();
        assert!(root.is_terminal());
        assert_eq!(engine.verdict(&root), Some(Winner::O));
    }

    #[test]
    fn random_plays_keep_invariants() {
        for _ in 0..16 {
            for rules in [Rules::default(), Rules::ramified()] {
                let engine = Engine::new(Arena::random(), rules);
                let mut position = engine.root();
                while !position.is_terminal() {
                    let legal = engine.legal(&position);
                    let m = (*legal.choose(&mut rand::rng()).unwrap()).clone();
                    position = engine.apply(&position, &m).unwrap();
                }
                let seq = position.sequence();
                assert!(seq.is_empty() || (seq[0].player() == Player::P && seq[0].is_initial()));
                assert!(seq.windows(2).all(|w| w[0].player() != w[1].player()));
                let mut addresses = position.addresses();
                addresses.sort();
                addresses.dedup();
                assert_eq!(addresses.len(), seq.len());
                assert!(seq.len() <= rules.ply_limit);
                assert!(engine.verdict(&position).is_some());
            }
        }
    }

    #[test]
    fn restore_rejects_broken_histories() {
        let engine = Engine::new(fixtures::fork(), Rules::default());
        assert!(engine.restore(&[addr("0.0")]).is_err());
        assert!(engine.restore(&[addr("0"), addr("0")]).is_err());
        assert_eq!(engine.restore(&[]).unwrap(), engine.root());
    }
}
