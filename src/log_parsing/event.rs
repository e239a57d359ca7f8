use chrono::{DateTime, Utc};

/// One recognized event from the server log.
///
/// Variants:
/// - `StreamStart`: a listener tuned in. Carries everything the report
///   needs from the start side of a session.
/// - `StreamEnd`: the listener's connection closed, with the duration the
///   server measured for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    StreamStart {
        uid: u64,
        started_at: DateTime<Utc>,
        client_ip: String,
        user_agent: String,
    },
    StreamEnd {
        uid: u64,
        ended_at: DateTime<Utc>,
        duration_secs: u64,
    },
}

impl LogEvent {
    /// The session UID this event belongs to.
    pub fn uid(&self) -> u64 {
        match self {
            LogEvent::StreamStart { uid, .. } => *uid,
            LogEvent::StreamEnd { uid, .. } => *uid,
        }
    }
}
