use crate::error::CountdownError;
use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone};
use std::fmt::Display;
use std::str::FromStr;

/// Accepted textual form of a target instant, interpreted in local time.
pub const TARGET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The fixed point in calendar time the countdown runs towards.
///
/// A target is configured once and never changes for the lifetime of an
/// engine. It is always anchored in the local timezone, the same way a
/// printed invitation states "24 March 2025, 6:00 p.m." without an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetInstant {
    at: DateTime<Local>,
}

impl TargetInstant {
    /// Parse a `YYYY-MM-DDTHH:MM:SS` wall-clock time in the local timezone.
    ///
    /// Ambiguous local times (a daylight saving fold) resolve to the earlier
    /// of the two instants.
    pub fn parse_local(value: &str) -> Result<Self, CountdownError> {
        Self::parse_with(value, |naive| Local.from_local_datetime(naive))
    }

    fn parse_with<F>(value: &str, resolve: F) -> Result<Self, CountdownError>
    where
        F: FnOnce(&NaiveDateTime) -> LocalResult<DateTime<Local>>,
    {
        let trimmed = value.trim();
        let naive = NaiveDateTime::parse_from_str(trimmed, TARGET_FORMAT).map_err(|e| {
            CountdownError::InvalidTarget {
                value: trimmed.to_string(),
                reason: e.to_string(),
            }
        })?;

        Self::resolve(resolve(&naive)).ok_or_else(|| CountdownError::NonexistentLocalTime {
            value: trimmed.to_string(),
        })
    }

    fn resolve(result: LocalResult<DateTime<Local>>) -> Option<Self> {
        match result {
            LocalResult::Single(at) => Some(Self { at }),
            LocalResult::Ambiguous(earliest, _) => Some(Self { at: earliest }),
            LocalResult::None => None,
        }
    }

    pub fn from_datetime<Tz: TimeZone>(at: DateTime<Tz>) -> Self {
        Self {
            at: at.with_timezone(&Local),
        }
    }

    pub fn at(&self) -> DateTime<Local> {
        self.at
    }

    /// Signed milliseconds from `now` until the target; negative once passed.
    pub fn millis_until(&self, now: DateTime<Local>) -> i64 {
        (self.at - now).num_milliseconds()
    }
}

impl FromStr for TargetInstant {
    type Err = CountdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_local(s)
    }
}

impl Display for TargetInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.at.format(TARGET_FORMAT))
    }
}
