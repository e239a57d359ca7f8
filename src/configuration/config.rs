use crate::error_handling::types::ConfigError;
use chrono::{FixedOffset, Local, Offset};

/// Runtime configuration for one conversion run.
///
/// This structure holds the two values that shape every output row: the
/// operator-supplied stream identifier and the UTC offset applied to the
/// local wall-clock timestamps found in the log.
///
/// # Fields Overview
///
/// The configuration contains the following attributes:
/// - `stream_id`: identifier for the broadcast channel being reported,
///   embedded verbatim in every output row. SoundExchange requires it to
///   contain no whitespace
/// - `utc_offset`: the fixed local-to-UTC offset attached to every parsed
///   timestamp. Captured once at startup, never re-read per line
#[derive(Debug, Clone)]
pub struct Config {
    pub stream_id: String,
    pub utc_offset: FixedOffset,
}

impl Config {
    /// Builds a validated configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::StreamIdWhitespace` when the stream id contains
    /// any whitespace character.
    pub fn new(stream_id: String, utc_offset: FixedOffset) -> Result<Self, ConfigError> {
        if stream_id.chars().any(char::is_whitespace) {
            return Err(ConfigError::StreamIdWhitespace(stream_id));
        }
        Ok(Self {
            stream_id,
            utc_offset,
        })
    }

    /// The system local UTC offset at the moment of the call.
    ///
    /// Callers capture this once at startup so that a run spanning a DST
    /// transition still applies one uniform offset to every line.
    pub fn local_offset() -> FixedOffset {
        Local::now().offset().fix()
    }

    /// Parses an explicit offset given as `[+-]HH:MM`.
    pub fn parse_offset(spec: &str) -> Result<FixedOffset, ConfigError> {
        let bad = || ConfigError::BadOffsetFormat(spec.to_string());

        let (sign, rest) = match spec.strip_prefix('-') {
            Some(rest) => (-1i32, rest),
            None => (1i32, spec.strip_prefix('+').unwrap_or(spec)),
        };
        let (hours, minutes) = rest.split_once(':').ok_or_else(bad)?;
        let hours: i32 = hours.parse().map_err(|_| bad())?;
        let minutes: i32 = minutes.parse().map_err(|_| bad())?;
        if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
            return Err(bad());
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(bad)
    }
}
