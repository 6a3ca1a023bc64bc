//! Static arena model: players, addresses, moves, and arena construction.
pub mod address;
pub use address::*;

pub mod arena;
pub use arena::*;

pub mod arena_move;
pub use arena_move::*;

pub mod builder;
pub use builder::*;

pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod player;
pub use player::*;

#[cfg(test)]
pub mod fixtures;
