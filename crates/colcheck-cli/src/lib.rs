//! CLI library components for colcheck.

pub mod logging;
pub mod prompt;
pub mod report;
pub mod session;
