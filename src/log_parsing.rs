//! Log line parsing module.
//!
//! This module turns raw Shoutcast DNAS log lines into structured stream
//! events that the session aggregator can correlate.

/// Submodule for the event data structures.
pub mod event;
/// Submodule for the regex-based line extractor.
pub mod event_extractor;

pub use event::LogEvent;
pub use event_extractor::EventExtractor;
