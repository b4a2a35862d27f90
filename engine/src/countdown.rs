use crate::clock::{Clock, SystemClock};
use crate::duration::RemainingDuration;
use crate::target::TargetInstant;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// What the engine publishes once the target instant has been reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElapsedPolicy {
    /// Keep re-publishing the last positive decomposition.
    #[default]
    Freeze,
    /// Publish an all-zero decomposition.
    #[serde(alias = "clamp")]
    Zero,
}

impl Display for ElapsedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElapsedPolicy::Freeze => write!(f, "freeze"),
            ElapsedPolicy::Zero => write!(f, "zero"),
        }
    }
}

/// Maintains the decomposition of time remaining until a fixed target.
///
/// The engine is a pure function of its clock: every [`tick`] re-derives the
/// whole decomposition from `target - now` instead of decrementing the
/// previous value, so a late or skipped tick never accumulates drift.
///
/// [`tick`]: CountdownEngine::tick
///
/// # Examples
///
/// ```no_run
/// use engine::{CountdownEngine, ElapsedPolicy, TargetInstant};
///
/// let target = TargetInstant::parse_local("2025-03-24T18:00:00")?;
/// let mut engine = CountdownEngine::with_system_clock(target, ElapsedPolicy::Freeze);
///
/// // The first value is available before any tick has run.
/// println!("{}", engine.current());
///
/// // Called once per second by the ticker.
/// let next = engine.tick();
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct CountdownEngine<C: Clock = SystemClock> {
    target: TargetInstant,
    clock: C,
    policy: ElapsedPolicy,
    current: RemainingDuration,
    elapsed: bool,
}

impl CountdownEngine<SystemClock> {
    pub fn with_system_clock(target: TargetInstant, policy: ElapsedPolicy) -> Self {
        Self::initialize(target, SystemClock, policy)
    }
}

impl<C: Clock> CountdownEngine<C> {
    /// Create an engine and compute its first decomposition immediately.
    ///
    /// A target that is already in the past goes straight to the elapsed
    /// policy. With [`ElapsedPolicy::Freeze`] there is no earlier positive
    /// value to keep, so the initial decomposition is zero.
    pub fn initialize(target: TargetInstant, clock: C, policy: ElapsedPolicy) -> Self {
        let mut engine = Self {
            target,
            clock,
            policy,
            current: RemainingDuration::ZERO,
            elapsed: false,
        };
        engine.recompute();

        log::debug!(
            "Countdown initialized for {} ({} remaining, elapsed policy: {})",
            engine.target,
            engine.current,
            engine.policy
        );
        engine
    }

    /// Recompute the decomposition against the current clock.
    pub fn tick(&mut self) -> RemainingDuration {
        self.recompute()
    }

    /// The most recently published decomposition.
    pub fn current(&self) -> RemainingDuration {
        self.current
    }

    pub fn target(&self) -> TargetInstant {
        self.target
    }

    pub fn policy(&self) -> ElapsedPolicy {
        self.policy
    }

    /// Whether the last computation found the target reached or passed.
    pub fn is_elapsed(&self) -> bool {
        self.elapsed
    }

    fn recompute(&mut self) -> RemainingDuration {
        let difference = self.target.millis_until(self.clock.now());

        if difference > 0 {
            if self.elapsed {
                log::warn!("Clock moved back before target {}, resuming", self.target);
            }
            self.elapsed = false;
            self.current = RemainingDuration::from_millis(difference);
            return self.current;
        }

        if !self.elapsed {
            log::info!(
                "Target {} reached, applying '{}' policy",
                self.target,
                self.policy
            );
        }
        self.elapsed = true;

        match self.policy {
            ElapsedPolicy::Freeze => {}
            ElapsedPolicy::Zero => self.current = RemainingDuration::ZERO,
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{Duration, FixedOffset, TimeZone};

    fn wedding_target() -> TargetInstant {
        TargetInstant::parse_local("2025-03-24T18:00:00").unwrap()
    }

    fn engine_at(
        offset_before_target: Duration,
        policy: ElapsedPolicy,
    ) -> (CountdownEngine<ManualClock>, ManualClock) {
        let target = wedding_target();
        let clock = ManualClock::new(target.at() - offset_before_target);
        let engine = CountdownEngine::initialize(target, clock.clone(), policy);
        (engine, clock)
    }

    #[test]
    fn test_invitation_scenario() {
        // Guadalajara has no daylight saving time, so the absolute gap is fixed.
        let guadalajara = FixedOffset::west_opt(6 * 3600).unwrap();
        let target =
            TargetInstant::from_datetime(guadalajara.with_ymd_and_hms(2025, 3, 24, 18, 0, 0).unwrap());
        let now = guadalajara
            .with_ymd_and_hms(2025, 2, 25, 23, 7, 27)
            .unwrap()
            .with_timezone(&chrono::Local);

        let engine = CountdownEngine::initialize(target, ManualClock::new(now), ElapsedPolicy::Freeze);

        assert_eq!(
            engine.current(),
            RemainingDuration {
                days: 26,
                hours: 18,
                minutes: 52,
                seconds: 33,
            }
        );
        assert!(!engine.is_elapsed());
    }

    #[test]
    fn test_initial_value_is_computed_before_first_tick() {
        let (engine, _) = engine_at(Duration::seconds(3_725), ElapsedPolicy::Freeze);
        assert_eq!(
            engine.current(),
            RemainingDuration {
                days: 0,
                hours: 1,
                minutes: 2,
                seconds: 5,
            }
        );
    }

    #[test]
    fn test_tick_tracks_clock() {
        let (mut engine, clock) = engine_at(Duration::seconds(10), ElapsedPolicy::Freeze);

        clock.advance(Duration::milliseconds(1_200));
        assert_eq!(engine.tick().seconds, 8);

        clock.advance(Duration::seconds(1));
        assert_eq!(engine.tick().seconds, 7);
    }

    #[test]
    fn test_target_instant_is_zero() {
        let (engine, _) = engine_at(Duration::zero(), ElapsedPolicy::Freeze);
        assert_eq!(engine.current(), RemainingDuration::ZERO);
        assert!(engine.is_elapsed());
    }

    #[test]
    fn test_freeze_keeps_last_positive_value() {
        let (mut engine, clock) = engine_at(Duration::milliseconds(2_500), ElapsedPolicy::Freeze);
        let last_positive = engine.current();
        assert_eq!(last_positive.seconds, 2);

        clock.advance(Duration::seconds(3));
        assert_eq!(engine.tick(), last_positive);
        assert!(engine.is_elapsed());

        clock.advance(Duration::hours(5));
        assert_eq!(engine.tick(), last_positive);
    }

    #[test]
    fn test_zero_policy_clamps_after_target() {
        let (mut engine, clock) = engine_at(Duration::milliseconds(2_500), ElapsedPolicy::Zero);
        assert_eq!(engine.current().seconds, 2);

        clock.advance(Duration::seconds(3));
        assert_eq!(engine.tick(), RemainingDuration::ZERO);
        assert!(engine.is_elapsed());
    }

    #[test]
    fn test_past_target_with_freeze_starts_at_zero() {
        let (engine, _) = engine_at(Duration::days(-3), ElapsedPolicy::Freeze);
        assert_eq!(engine.current(), RemainingDuration::ZERO);
        assert!(engine.is_elapsed());
    }

    #[test]
    fn test_resumes_when_clock_moves_back() {
        let (mut engine, clock) = engine_at(Duration::seconds(1), ElapsedPolicy::Zero);

        clock.advance(Duration::seconds(5));
        assert!(engine.tick().is_zero());

        clock.advance(Duration::seconds(-65));
        assert_eq!(
            engine.tick(),
            RemainingDuration {
                days: 0,
                hours: 0,
                minutes: 1,
                seconds: 0,
            }
        );
        assert!(!engine.is_elapsed());
    }

    #[test]
    fn test_policy_deserializes_from_config_names() {
        let freeze: ElapsedPolicy = serde_json::from_str("\"freeze\"").unwrap();
        let zero: ElapsedPolicy = serde_json::from_str("\"zero\"").unwrap();
        let clamp: ElapsedPolicy = serde_json::from_str("\"clamp\"").unwrap();

        assert_eq!(freeze, ElapsedPolicy::Freeze);
        assert_eq!(zero, ElapsedPolicy::Zero);
        assert_eq!(clamp, ElapsedPolicy::Zero);
    }
}
