use chrono::{DateTime, Local};

/// Source of "now" for the countdown engine.
///
/// The engine only ever asks for the current local time; a wrong device
/// clock is outside its control and is not detected.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock of the running machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use manual::ManualClock;

#[cfg(any(test, feature = "test-utils"))]
mod manual {
    use super::Clock;
    use chrono::{DateTime, Duration, Local};
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    /// Clock that only moves when told to. Clones share the same time.
    #[derive(Debug, Clone)]
    pub struct ManualClock {
        now: Arc<Mutex<DateTime<Local>>>,
    }

    impl ManualClock {
        pub fn new(start: DateTime<Local>) -> Self {
            Self {
                now: Arc::new(Mutex::new(start)),
            }
        }

        pub fn set(&self, at: DateTime<Local>) {
            *self.lock() = at;
        }

        fn lock(&self) -> MutexGuard<'_, DateTime<Local>> {
            self.now.lock().unwrap_or_else(PoisonError::into_inner)
        }

        pub fn advance(&self, by: Duration) {
            let mut now = self.lock();
            let next = *now + by;
            *now = next;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Local> {
            *self.lock()
        }
    }
}
