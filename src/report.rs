//! Report output module.
//!
//! Renders completed sessions into the SoundExchange tab-delimited report
//! format and writes them to the output stream.

pub mod report_writer;
pub mod row;

pub use report_writer::ReportWriter;
