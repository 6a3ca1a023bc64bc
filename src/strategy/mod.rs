//! Deterministic, player-scoped strategies and the per-game store.
pub mod error;
pub use error::*;

pub mod key;
pub use key::*;

pub mod response;
pub use response::*;

pub mod store;
pub use store::*;

pub mod strategy;
pub use strategy::*;
