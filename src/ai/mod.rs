//! Heuristic move suggestion: bounded negamax over the play engine.
pub mod difficulty;
pub use difficulty::*;

pub mod selector;
pub use selector::*;

pub mod suggestion;
pub use suggestion::*;
