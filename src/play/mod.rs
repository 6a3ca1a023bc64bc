//! Positions and the play engine: legality, transitions, termination.
pub mod engine;
pub use engine::*;

pub mod error;
pub use error::*;

pub mod legality;
pub use legality::*;

pub mod position;
pub use position::*;

pub mod rules;
pub use rules::*;

pub mod winner;
pub use winner::*;
