use crate::clock::Clock;
use crate::countdown::CountdownEngine;
use crate::duration::RemainingDuration;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Default recomputation cadence.
pub const DEFAULT_CADENCE: Duration = Duration::from_millis(1_000);

/// Drives a [`CountdownEngine`] on a fixed cadence and publishes every
/// recomputation to any number of subscribers.
///
/// The ticker owns the periodic task. Dropping the ticker (or calling
/// [`shutdown`](CountdownTicker::shutdown)) cancels it, so no recomputation
/// runs after the owner is gone.
pub struct CountdownTicker {
    cancel_token: CancellationToken,
    receiver: watch::Receiver<RemainingDuration>,
    handle: Option<JoinHandle<()>>,
}

impl CountdownTicker {
    /// Start ticking. Must be called from within a tokio runtime.
    ///
    /// The engine's initial value is published before the first period
    /// elapses, so subscribers never observe an empty countdown.
    pub fn start<C>(mut engine: CountdownEngine<C>, cadence: Duration) -> CountdownTicker
    where
        C: Clock + 'static,
    {
        let (tx, receiver) = watch::channel(engine.current());
        let cancel_token = CancellationToken::new();
        let token = cancel_token.clone();

        log::info!(
            "Starting countdown ticker for {} every {}ms",
            engine.target(),
            cadence.as_millis()
        );

        // First recomputation one period after start; the initial value is already published.
        let mut interval = tokio::time::interval_at(Instant::now() + cadence, cadence);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let remaining = engine.tick();
                        if tx.send(remaining).is_err() {
                            log::debug!("All countdown subscribers dropped, stopping ticker");
                            break;
                        }
                    }
                    () = token.cancelled() => {
                        log::debug!("Countdown ticker cancelled");
                        break;
                    }
                }
            }
        });

        CountdownTicker {
            cancel_token,
            receiver,
            handle: Some(handle),
        }
    }

    /// A new receiver of recomputed values.
    pub fn subscribe(&self) -> watch::Receiver<RemainingDuration> {
        self.receiver.clone()
    }

    /// The most recently published value.
    pub fn latest(&self) -> RemainingDuration {
        *self.receiver.borrow()
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Cancel the periodic task and wait for it to stop.
    pub async fn shutdown(mut self) {
        self.cancel_token.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                log::warn!("Countdown ticker task ended abnormally: {e}");
            }
        }
        log::info!("Countdown ticker stopped");
    }

    /// Cancel the periodic task without waiting for it.
    pub fn stop(&self) {
        self.cancel_token.cancel();
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}
