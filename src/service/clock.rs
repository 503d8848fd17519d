//! Wall clock and cancellable timers.
//!
//! Sessions read the time through the `Clock` trait so state derivation can be tested against a
//! fixed instant, while timers are plain tokio tasks wrapped in a `TimerHandle` that the
//! session keeps and aborts when it ends.

use chrono::{DateTime, Utc};
use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Handle to a spawned timer or loop task.
///
/// Dropping the handle detaches the task; call `cancel` to stop it.
pub struct TimerHandle(JoinHandle<()>);

impl TimerHandle {
    /// Spawns a future as a cancellable task.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self(tokio::spawn(future))
    }

    /// Aborts the task at its next suspension point.
    pub fn cancel(&self) {
        self.0.abort();
    }

    /// Waits for the task to finish on its own.
    ///
    /// Cancelled and panicked tasks count as finished.
    pub async fn join(self) {
        if let Err(e) = self.0.await {
            if e.is_panic() {
                tracing::error!("Timer task panicked: {}", e);
            }
        }
    }
}

/// Runs `callback` once after `delay`.
///
/// # Arguments
/// - `delay` - Time to wait before firing
/// - `callback` - Async action to run
///
/// # Returns
/// - `TimerHandle` - Handle that cancels the timer if it has not fired yet
pub fn after<F, Fut>(delay: Duration, callback: F) -> TimerHandle
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    TimerHandle::spawn(async move {
        tokio::time::sleep(delay).await;
        callback().await;
    })
}

/// Runs `callback` every `period`, first firing one period from now.
///
/// Each invocation is awaited before the next one is scheduled, so a slow callback delays the
/// following ticks instead of stacking them up. The loop stops when the callback returns
/// `ControlFlow::Break`.
///
/// # Arguments
/// - `period` - Interval between invocations
/// - `callback` - Async action to run on every tick
///
/// # Returns
/// - `TimerHandle` - Handle that stops the periodic task
pub fn every<F, Fut>(period: Duration, mut callback: F) -> TimerHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ControlFlow<()>> + Send + 'static,
{
    TimerHandle::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            if callback().await.is_break() {
                break;
            }
        }
    })
}

/// Converts the time left until `target` into a sleep duration, zero when already past.
pub fn until(now: DateTime<Utc>, target: DateTime<Utc>) -> Duration {
    (target - now).to_std().unwrap_or(Duration::ZERO)
}
