use crate::configuration::config::Config;
use crate::error_handling::types::ConvertError;
use crate::log_parsing::event_extractor::EventExtractor;
use crate::report::report_writer::ReportWriter;
use crate::session_management::session_aggregator::SessionAggregator;
use log::info;
use std::io::{BufRead, Write};

/// The structure driving one conversion run
///
/// Feeds the input to the extractor line by line, folds the extracted
/// events into the aggregator, and flushes the ordered report once the
/// whole log has been consumed.
pub struct Converter {
    extractor: EventExtractor,
    aggregator: SessionAggregator,
}

impl Converter {
    pub fn new(config: Config) -> Self {
        Self {
            extractor: EventExtractor::new(config.utc_offset),
            aggregator: SessionAggregator::new(config.stream_id),
        }
    }

    /// Consumes the whole input, then writes the report. Returns the number
    /// of rows written.
    ///
    /// Lines are read as raw bytes and decoded lossily; the agent field of
    /// a real-world log can carry arbitrary bytes.
    pub fn run<R: BufRead, W: Write>(
        mut self,
        mut input: R,
        output: W,
    ) -> Result<usize, ConvertError> {
        let mut buffer = Vec::new();
        let mut lines = 0usize;
        loop {
            buffer.clear();
            let read = input
                .read_until(b'\n', &mut buffer)
                .map_err(ConvertError::ReadFailed)?;
            if read == 0 {
                break;
            }
            lines += 1;

            let line = String::from_utf8_lossy(&buffer);
            if let Some(event) = self.extractor.extract(&line) {
                self.aggregator.on_event(event);
            }
        }
        info!(
            "consumed {} log lines, {} sessions seen",
            lines,
            self.aggregator.session_count()
        );

        let sessions = self.aggregator.finalize();
        ReportWriter::new(output).write_report(&sessions)
    }
}
