//! Session management core module.
//!
//! This module provides the types and submodules for reconstructing listener
//! sessions out of the start and end events extracted from the log.

/// Submodule for the session record.
pub mod session;
/// Submodule for the aggregator correlating events into sessions.
pub mod session_aggregator;

pub use session::Session;
pub use session_aggregator::SessionAggregator;
