use chrono::{DateTime, Utc};

/// One listener's connection to the stream, reconstructed from its start
/// and end events. `duration_secs` and `status` stay unset until the
/// matching end event arrives; a session that never completes is never
/// reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub client_ip: String,
    pub started_at: DateTime<Utc>,
    pub user_agent: String,
    pub duration_secs: Option<u64>,
    pub status: Option<u16>,
    pub stream_id: String,
}

impl Session {
    /// Whether both sides of the session have been seen.
    pub fn is_completed(&self) -> bool {
        self.duration_secs.is_some()
    }
}
