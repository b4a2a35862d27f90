use thiserror::Error;

/// Errors raised while configuring a countdown.
///
/// The countdown itself never fails once it is running: it is a pure
/// computation over the system clock. Every variant here describes a target
/// instant that could not be turned into a point in time.
///
/// # Examples
///
/// ```no_run
/// use engine::{CountdownError, TargetInstant};
///
/// match TargetInstant::parse_local("2025-03-24 18:00") {
///     Ok(target) => println!("Counting down to {target}"),
///     Err(CountdownError::InvalidTarget { value, reason }) => {
///         eprintln!("'{value}' is not a valid event time: {reason}");
///     }
///     Err(other) => eprintln!("{other}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountdownError {
    /// The target string does not follow `YYYY-MM-DDTHH:MM:SS`.
    #[error("Invalid target instant '{value}': {reason}")]
    InvalidTarget { value: String, reason: String },

    /// The target names a wall-clock time that the local timezone skips
    /// (for example inside a daylight saving gap).
    #[error("Target instant '{value}' does not exist in the local timezone")]
    NonexistentLocalTime { value: String },
}
