use crate::session_management::session::Session;
use log::debug;

// SOUNDEXCHANGE STANDARD FILE FORMAT
//
// Tab delimited .txt, one file per stream, no header row.
//
// Columns (in order):
// - IP address (no port number)
// - Date listener tuned in (YYYY-MM-DD)
// - Time listener tuned in (HH:MM:SS, 24-hour, UTC)
// - Stream ID (no spaces)
// - Duration of listening (seconds)
// - HTTP status code
// - Referrer / client player

/// Renders one session to its report row, or `None` when the session must
/// not appear in the report. A skipped record never aborts the batch.
///
/// Skips: sessions with no recorded end, and sessions whose reported
/// duration is zero (valid data, excluded by the reporting rules).
pub fn render(session: &Session) -> Option<String> {
    let duration = match session.duration_secs {
        Some(d) => d,
        None => {
            debug!("unfinished session from {} skipped", session.client_ip);
            return None;
        }
    };
    if duration == 0 {
        debug!("zero-duration session from {} skipped", session.client_ip);
        return None;
    }
    let status = session.status?;

    let tuned_in = session.started_at.format("%Y-%m-%d\t%H:%M:%S");
    Some(format!(
        "{}\t{}\t{}\t{}\t{}\t{}\n",
        session.client_ip, tuned_in, session.stream_id, duration, status, session.user_agent
    ))
}
