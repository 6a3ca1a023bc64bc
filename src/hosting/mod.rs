//! HTTP transport over the service, plus live sessions held server-side.
pub mod casino;
pub use casino::*;

pub mod server;
pub use server::*;
