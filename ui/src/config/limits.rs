//! Bounds applied when validating the configuration

/// Shortest countdown cadence accepted (milliseconds)
pub const MIN_CADENCE_MS: u64 = 100;

/// Longest countdown cadence accepted (milliseconds)
pub const MAX_CADENCE_MS: u64 = 60_000;

/// Default countdown cadence (milliseconds)
pub const DEFAULT_CADENCE_MS: u64 = 1_000;

/// UI tick interval bounds (milliseconds)
pub const MIN_TICK_INTERVAL_MS: u64 = 10;
pub const MAX_TICK_INTERVAL_MS: u64 = 1_000;

/// How long a changed digit stays highlighted (milliseconds)
pub const DIGIT_HIGHLIGHT_MS: u64 = 400;
