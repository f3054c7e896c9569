//! Cancellable timers owned by the game controller
//!
//! Both handles cancel their background task when dropped, so replacing or
//! clearing the field that holds them is enough to stop them firing.

use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Repeating countdown clock for the active round.
///
/// The first tick fires one full period after start, so resuming from pause
/// never produces an immediate tick.
pub struct RoundTimer {
    token: CancellationToken,
}

impl RoundTimer {
    /// Start ticking every `period`. The task stops when `on_tick` returns
    /// `false` or the handle is dropped.
    pub fn start<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => {
                        if !on_tick() {
                            break;
                        }
                    }
                }
            }
        });

        Self { token }
    }
}

impl Drop for RoundTimer {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// One-shot delayed callback (the reveal pause between rounds)
pub struct DelayedSignal {
    token: CancellationToken,
}

impl DelayedSignal {
    pub fn after<F>(delay: Duration, fire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(delay) => fire(),
            }
        });

        Self { token }
    }
}

impl Drop for DelayedSignal {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
