//! Request/response payloads and the stateless service behind them.
pub mod error;
pub use error::*;

pub mod request;
pub use request::*;

pub mod response;
pub use response::*;

pub mod service;
pub use service::*;
