use crate::error_handling::types::ConvertError;
use crate::report::row;
use crate::session_management::session::Session;
use log::info;
use std::io::Write;

/// Writes the rendered report rows to the output stream, in the order the
/// aggregator handed the sessions over.
pub struct ReportWriter<W: Write> {
    output: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    /// Writes one row per reportable session and flushes the stream.
    /// Returns the number of rows written. Sessions that render to nothing
    /// are skipped without failing the batch; a write failure is fatal.
    pub fn write_report(&mut self, sessions: &[Session]) -> Result<usize, ConvertError> {
        let mut written = 0;
        for session in sessions {
            if let Some(record) = row::render(session) {
                self.output
                    .write_all(record.as_bytes())
                    .map_err(ConvertError::WriteFailed)?;
                written += 1;
            }
        }
        self.output.flush().map_err(ConvertError::WriteFailed)?;
        info!("wrote {} report rows", written);
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sim_session(ip: &str, duration_secs: Option<u64>) -> Session {
        Session {
            client_ip: ip.into(),
            started_at: Utc.with_ymd_and_hms(2013, 7, 1, 12, 35, 59).unwrap(),
            user_agent: "WinampMPEG/5.0".into(),
            duration_secs,
            status: duration_secs.map(|_| 200),
            stream_id: "kwmr128".into(),
        }
    }

    #[test]
    fn test_write_report_counts_only_rendered_rows() {
        let sessions = vec![
            sim_session("10.0.0.1", Some(62)),
            sim_session("10.0.0.2", Some(0)),
            sim_session("10.0.0.3", Some(5)),
        ];

        let mut buffer = Vec::new();
        let written = ReportWriter::new(&mut buffer)
            .write_report(&sessions)
            .unwrap();

        assert_eq!(written, 2);
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("10.0.0.1\t"));
        assert!(!text.contains("10.0.0.2"));
    }

    #[test]
    fn test_write_report_with_no_sessions_writes_nothing() {
        let mut buffer = Vec::new();
        let written = ReportWriter::new(&mut buffer).write_report(&[]).unwrap();
        assert_eq!(written, 0);
        assert!(buffer.is_empty());
    }
}
