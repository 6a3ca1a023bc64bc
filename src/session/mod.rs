//! Game sessions: who controls each seat, the move log, and the arbiter
//! that resolves the next move.
pub mod arbiter;
pub use arbiter::*;

pub mod entry;
pub use entry::*;

pub mod error;
pub use error::*;

pub mod game;
pub use game::*;

pub mod mode;
pub use mode::*;

pub mod source;
pub use source::*;

pub mod state;
pub use state::*;
