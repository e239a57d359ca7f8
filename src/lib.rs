pub mod configuration;
pub use configuration::config::Config;

pub mod log_parsing;
pub use log_parsing::event::LogEvent;
pub use log_parsing::event_extractor::EventExtractor;

pub mod session_management;
pub use session_management::session::Session;
pub use session_management::session_aggregator::SessionAggregator;

pub mod report;
pub use report::report_writer::ReportWriter;

pub mod converter;
pub use converter::Converter;

pub mod error_handling;
