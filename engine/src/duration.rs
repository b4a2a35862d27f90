use serde::Serialize;
use std::fmt::Display;

pub const MILLIS_PER_SECOND: u64 = 1_000;
pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// Time left until the target, split into display units.
///
/// Values are produced fresh on every tick and never mutated afterwards.
/// All divisions truncate, so a decomposition under-reports the true
/// remaining time by strictly less than one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct RemainingDuration {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl RemainingDuration {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a signed millisecond difference.
    ///
    /// Non-positive differences decompose to [`RemainingDuration::ZERO`].
    pub fn from_millis(difference: i64) -> Self {
        if difference <= 0 {
            return Self::ZERO;
        }
        let millis = difference as u64;

        Self {
            days: millis / MILLIS_PER_DAY,
            hours: ((millis / MILLIS_PER_HOUR) % 24) as u8,
            minutes: ((millis / MILLIS_PER_MINUTE) % 60) as u8,
            seconds: ((millis / MILLIS_PER_SECOND) % 60) as u8,
        }
    }

    /// Milliseconds represented by this decomposition.
    pub fn total_millis(&self) -> u64 {
        let hours = self.days * 24 + u64::from(self.hours);
        let minutes = hours * 60 + u64::from(self.minutes);
        let seconds = minutes * 60 + u64::from(self.seconds);
        seconds * MILLIS_PER_SECOND
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Unit values in display order: days, hours, minutes, seconds.
    pub fn units(&self) -> [u64; 4] {
        [
            self.days,
            u64::from(self.hours),
            u64::from(self.minutes),
            u64::from(self.seconds),
        ]
    }
}

impl Display for RemainingDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
