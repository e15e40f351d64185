//! Periodic tick scheduling.
//!
//! Sessions are schedule-agnostic. `TickDriver` is the collaborator that
//! turns wall-clock time into `tick()` calls: one call per period, never a
//! burst of catch-up ticks after a stall.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::cycle::BreathingSession;
use crate::error::{CoreError, Result};
use crate::events::Event;

/// Anything that advances one unit per elapsed period.
pub trait Tickable {
    fn tick(&mut self) -> Option<Event>;
    fn is_running(&self) -> bool;
}

impl Tickable for BreathingSession {
    fn tick(&mut self) -> Option<Event> {
        BreathingSession::tick(self)
    }

    fn is_running(&self) -> bool {
        BreathingSession::is_running(self)
    }
}

/// Calls `tick()` on a target at a fixed cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickDriver {
    period: Duration,
}

impl TickDriver {
    pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfiguration` for a zero period.
    pub fn new(period: Duration) -> Result<Self> {
        if period.is_zero() {
            return Err(CoreError::invalid(
                "driver.tick_interval_ms",
                "tick period must be non-zero",
            ));
        }
        Ok(Self { period })
    }

    pub fn from_millis(ms: u64) -> Result<Self> {
        Self::new(Duration::from_millis(ms))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Drive `target` until `on_tick` breaks or shutdown is signalled.
    ///
    /// The first tick lands one full period after the call. `on_tick` sees
    /// the target right after each `tick()` together with the event it
    /// produced. The loop also ends when the shutdown sender is dropped.
    /// Returns how many ticks were delivered.
    pub async fn run<T, F>(
        &self,
        target: &mut T,
        mut shutdown: watch::Receiver<bool>,
        mut on_tick: F,
    ) -> u64
    where
        T: Tickable,
        F: FnMut(&T, Option<&Event>) -> ControlFlow<()>,
    {
        if *shutdown.borrow_and_update() {
            return 0;
        }

        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first interval tick completes immediately.
        interval.tick().await;

        let mut delivered = 0u64;
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let event = target.tick();
                    delivered += 1;
                    if on_tick(target, event.as_ref()).is_break() {
                        break;
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow_and_update() {
                        break;
                    }
                }
            }
        }
        tracing::debug!(delivered, running = target.is_running(), "tick driver stopped");
        delivered
    }
}

impl Default for TickDriver {
    fn default() -> Self {
        Self {
            period: Self::DEFAULT_PERIOD,
        }
    }
}
