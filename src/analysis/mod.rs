//! Strategy evaluation against fixed opponents, and arena shape summaries.
pub mod analyzer;
pub use analyzer::*;

pub mod config;
pub use config::*;

pub mod report;
pub use report::*;

pub mod summary;
pub use summary::*;
