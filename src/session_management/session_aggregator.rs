use crate::log_parsing::event::LogEvent;
use crate::session_management::session::Session;
use log::debug;
use std::collections::HashMap;

/// The source log carries no HTTP status, so the report format's status
/// column is filled with a constant OK.
const FILL_STATUS: u16 = 200;

/// The structure related to session reconstruction
///
/// This structure consumes the stream of extracted events and correlates
/// them into completed sessions, keyed by the server-assigned UID.
///
/// # Fields Overview
///
/// - `sessions`: open and completed sessions of the current run, keyed by UID
/// - `stream_id`: run-wide identifier stamped onto every session
pub struct SessionAggregator {
    sessions: HashMap<u64, Session>,
    stream_id: String,
}

impl SessionAggregator {
    pub fn new(stream_id: String) -> Self {
        Self {
            sessions: HashMap::new(),
            stream_id,
        }
    }

    /// Folds one event into the session table.
    ///
    /// A start event creates the session for its UID, silently replacing any
    /// earlier unfinished start with the same UID. An end event completes the
    /// matching session, or is dropped if no start was ever seen for it. A
    /// repeated end event overwrites the previous duration.
    pub fn on_event(&mut self, event: LogEvent) {
        match event {
            LogEvent::StreamStart {
                uid,
                started_at,
                client_ip,
                user_agent,
            } => {
                let session = Session {
                    client_ip,
                    started_at,
                    user_agent,
                    duration_secs: None,
                    status: None,
                    stream_id: self.stream_id.clone(),
                };
                if self.sessions.insert(uid, session).is_some() {
                    debug!("session {} restarted, earlier start replaced", uid);
                }
            }
            LogEvent::StreamEnd {
                uid,
                ended_at,
                duration_secs,
            } => match self.sessions.get_mut(&uid) {
                Some(session) => {
                    debug!(
                        "session {} closed at {} after {}s",
                        uid, ended_at, duration_secs
                    );
                    session.duration_secs = Some(duration_secs);
                    session.status = Some(FILL_STATUS);
                }
                None => debug!("end event for unknown session {}, dropped", uid),
            },
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Consumes the aggregator and returns the completed sessions, ordered
    /// by UTC start time ascending with the UID as a deterministic
    /// tie-break. Sessions that never received an end event are discarded.
    pub fn finalize(self) -> Vec<Session> {
        let mut completed: Vec<(u64, Session)> = self
            .sessions
            .into_iter()
            .filter(|(_, session)| session.is_completed())
            .collect();
        completed.sort_by(|(a_uid, a), (b_uid, b)| {
            a.started_at.cmp(&b.started_at).then(a_uid.cmp(b_uid))
        });
        completed.into_iter().map(|(_, session)| session).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_372_680_959 + secs, 0).unwrap()
    }

    fn sim_start(uid: u64, started_at: DateTime<Utc>) -> LogEvent {
        LogEvent::StreamStart {
            uid,
            started_at,
            client_ip: format!("10.0.0.{}", uid),
            user_agent: "iTunes/11.0.2".into(),
        }
    }

    fn sim_end(uid: u64, duration_secs: u64) -> LogEvent {
        LogEvent::StreamEnd {
            uid,
            ended_at: ts(duration_secs as i64),
            duration_secs,
        }
    }

    #[test]
    fn test_matched_pair_completes_one_session() {
        let mut aggregator = SessionAggregator::new("kwmr128".into());
        aggregator.on_event(sim_start(206245, ts(0)));
        aggregator.on_event(sim_end(206245, 28));

        let sessions = aggregator.finalize();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].client_ip, "10.0.0.206245");
        assert_eq!(sessions[0].started_at, ts(0));
        assert_eq!(sessions[0].duration_secs, Some(28));
        assert_eq!(sessions[0].status, Some(200));
        assert_eq!(sessions[0].stream_id, "kwmr128");
    }

    #[test]
    fn test_orphan_start_is_never_emitted() {
        let mut aggregator = SessionAggregator::new("kwmr128".into());
        aggregator.on_event(sim_start(1, ts(0)));

        assert_eq!(aggregator.session_count(), 1);
        assert!(aggregator.finalize().is_empty());
    }

    #[test]
    fn test_orphan_end_is_dropped() {
        let mut aggregator = SessionAggregator::new("kwmr128".into());
        aggregator.on_event(sim_end(1, 28));

        assert_eq!(aggregator.session_count(), 0);
        assert!(aggregator.finalize().is_empty());
    }

    #[test]
    fn test_last_start_wins_for_duplicate_uid() {
        let mut aggregator = SessionAggregator::new("kwmr128".into());
        aggregator.on_event(sim_start(1, ts(0)));
        aggregator.on_event(sim_start(1, ts(60)));
        aggregator.on_event(sim_end(1, 10));

        let sessions = aggregator.finalize();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].started_at, ts(60));
    }

    #[test]
    fn test_duplicate_end_overwrites_duration() {
        let mut aggregator = SessionAggregator::new("kwmr128".into());
        aggregator.on_event(sim_start(1, ts(0)));
        aggregator.on_event(sim_end(1, 10));
        aggregator.on_event(sim_end(1, 45));

        let sessions = aggregator.finalize();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].duration_secs, Some(45));
    }

    #[test]
    fn test_finalize_orders_by_start_time_not_completion() {
        let mut aggregator = SessionAggregator::new("kwmr128".into());
        aggregator.on_event(sim_start(30, ts(120)));
        aggregator.on_event(sim_start(10, ts(0)));
        aggregator.on_event(sim_start(20, ts(60)));
        // Completion order deliberately scrambled.
        aggregator.on_event(sim_end(20, 5));
        aggregator.on_event(sim_end(30, 5));
        aggregator.on_event(sim_end(10, 5));

        let starts: Vec<_> = aggregator
            .finalize()
            .into_iter()
            .map(|s| s.started_at)
            .collect();
        assert_eq!(starts, vec![ts(0), ts(60), ts(120)]);
    }

    #[test]
    fn test_equal_start_times_order_by_uid() {
        let mut aggregator = SessionAggregator::new("kwmr128".into());
        aggregator.on_event(sim_start(7, ts(0)));
        aggregator.on_event(sim_start(3, ts(0)));
        aggregator.on_event(sim_end(7, 5));
        aggregator.on_event(sim_end(3, 5));

        let ips: Vec<_> = aggregator
            .finalize()
            .into_iter()
            .map(|s| s.client_ip)
            .collect();
        assert_eq!(ips, vec!["10.0.0.3", "10.0.0.7"]);
    }
}
