use crate::log_parsing::event::LogEvent;
use chrono::{FixedOffset, NaiveDateTime, TimeZone, Utc};
use regex::Regex;

/// Tag marking a listener-connection ("destination") log category. Every
/// other category (startup banner, `main` pid lines, ...) is ignored.
const DESTINATION_TAG: &str = "dest:";

/// Format of the local wall-clock timestamp at the head of each line.
const TIMESTAMP_FORMAT: &str = "%m/%d/%y@%H:%M:%S";

/// The structure extracting stream events from raw log lines
///
/// One extractor is built per run. It holds the compiled line patterns and
/// the fixed local-to-UTC offset applied to every timestamp it reads.
///
/// # Fields Overview
///
/// - `line_pattern`: the outer `<ts> [category] detail[extra]{agent}` shape
/// - `uid_pattern`: the `(UID: <digits>)` tail of a stream-start detail
/// - `close_pattern`: the `(<digits> seconds) (UID: <digits>)` tail of a
///   connection-closed detail
/// - `utc_offset`: offset attached to parsed local timestamps before
///   normalizing them to UTC
pub struct EventExtractor {
    line_pattern: Regex,
    uid_pattern: Regex,
    close_pattern: Regex,
    utc_offset: FixedOffset,
}

impl EventExtractor {
    pub fn new(utc_offset: FixedOffset) -> Self {
        Self {
            line_pattern: Regex::new(
                r"<(?P<date>\d{2}/\d{2}/\d{2}@\d{2}:\d{2}:\d{2})>\s\[(?P<event_type>.+)\] (?P<event>.+)\[.+\]\{(?P<agent>.+)\}",
            )
            .expect("line pattern is a valid regex"),
            uid_pattern: Regex::new(r".+\(UID: (?P<uid>\d+)\)")
                .expect("uid pattern is a valid regex"),
            close_pattern: Regex::new(r".+\((?P<duration>\d+) seconds\) \(UID: (?P<uid>\d+)\)")
                .expect("close pattern is a valid regex"),
            utc_offset,
        }
    }

    /// Extracts the stream event carried by one log line, if any.
    ///
    /// Lines that do not match the bracket grammar, whose category is not a
    /// destination event, or that lack a required sub-pattern yield `None`.
    /// That is the normal filtering path, not an error.
    pub fn extract(&self, line: &str) -> Option<LogEvent> {
        let caps = self.line_pattern.captures(line)?;

        let category = caps.name("event_type")?.as_str();
        let client_ip = category.strip_prefix(DESTINATION_TAG)?.trim_start();

        let timestamp = self.to_utc(caps.name("date")?.as_str())?;
        let detail = caps.name("event")?.as_str();

        if detail.starts_with("sta") {
            let uid = self.uid_pattern.captures(detail)?["uid"].parse().ok()?;
            // The braced agent field carries a 2-character tag ("A:") ahead
            // of the player string itself.
            let agent = caps.name("agent")?.as_str();
            let user_agent = agent.get(2..).unwrap_or("").trim_start().to_string();

            Some(LogEvent::StreamStart {
                uid,
                started_at: timestamp,
                client_ip: client_ip.to_string(),
                user_agent,
            })
        } else if detail.starts_with("con") {
            let close = self.close_pattern.captures(detail)?;

            Some(LogEvent::StreamEnd {
                uid: close["uid"].parse().ok()?,
                ended_at: timestamp,
                duration_secs: close["duration"].parse().ok()?,
            })
        } else {
            None
        }
    }

    /// Interprets a local wall-clock timestamp with the run-wide offset and
    /// normalizes it to UTC.
    fn to_utc(&self, local: &str) -> Option<chrono::DateTime<Utc>> {
        let naive = NaiveDateTime::parse_from_str(local, TIMESTAMP_FORMAT).ok()?;
        self.utc_offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
