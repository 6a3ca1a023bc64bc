//! Fully automated play: single games, parallel batches, and round-robin tournaments.
pub mod batch;
pub use batch::*;

pub mod error;
pub use error::*;

pub mod result;
pub use result::*;

pub mod simulator;
pub use simulator::*;

pub mod tournament;
pub use tournament::*;
