//! Breathing cycle engine.
//!
//! A tick-driven state machine over the four breathing phases. It owns no
//! timer: the caller invokes `tick()` once per elapsed second.
//!
//! ## State Transitions
//!
//! ```text
//! Ready -> Inhale -> HoldAfterInhale -> Exhale -> HoldAfterExhale -> Inhale ...
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut session = BreathingSession::new(4)?;
//! session.start();
//! // Once per second:
//! session.tick(); // Some(Event) when the phase changes
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::error::{CoreError, Result};
use crate::events::Event;

pub const DEFAULT_PHASE_DURATION: u32 = 4;

/// State of one breathing session.
///
/// `remaining` stays within `1..=phase_duration` at all times; a phase
/// change and the countdown refill happen in the same `tick()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionState")]
pub struct BreathingSession {
    phase: Phase,
    remaining: u32,
    phase_duration: u32,
    cycles_completed: u64,
    running: bool,
}

/// Wire shape of a session; validated before it becomes a `BreathingSession`.
#[derive(Deserialize)]
struct SessionState {
    phase: Phase,
    remaining: u32,
    phase_duration: u32,
    cycles_completed: u64,
    running: bool,
}

impl TryFrom<SessionState> for BreathingSession {
    type Error = CoreError;

    fn try_from(state: SessionState) -> Result<Self> {
        let mut session = BreathingSession::new(state.phase_duration)?;
        if !(1..=state.phase_duration).contains(&state.remaining) {
            return Err(CoreError::invalid(
                "remaining",
                format!("must be within 1..={}", state.phase_duration),
            ));
        }
        session.phase = state.phase;
        session.remaining = state.remaining;
        session.cycles_completed = state.cycles_completed;
        session.running = state.running && state.phase.is_active();
        Ok(session)
    }
}

impl BreathingSession {
    /// Create an idle session.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfiguration` if `phase_duration` is 0.
    pub fn new(phase_duration: u32) -> Result<Self> {
        if phase_duration < 1 {
            return Err(CoreError::invalid(
                "phase_duration",
                "must be at least 1 second",
            ));
        }
        Ok(Self {
            phase: Phase::Ready,
            remaining: phase_duration,
            phase_duration,
            cycles_completed: 0,
            running: false,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn phase_duration(&self) -> u32 {
        self.phase_duration
    }

    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// 0.0 .. 1.0 progress through the current cycle.
    pub fn cycle_progress(&self) -> f64 {
        let Some(index) = self.phase.cycle_index() else {
            return 0.0;
        };
        let d = self.phase_duration as u64;
        let elapsed = index as u64 * d + d.saturating_sub(u64::from(self.remaining));
        elapsed as f64 / (4 * d) as f64
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase,
            label: self.phase.label().to_string(),
            remaining: self.remaining,
            phase_duration: self.phase_duration,
            cycles_completed: self.cycles_completed,
            running: self.running,
            score: None,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// (Re)start from the top of the cycle. Completed cycles are kept.
    pub fn start(&mut self) -> Event {
        self.phase = Phase::Inhale;
        self.remaining = self.phase_duration;
        self.running = true;
        tracing::info!(
            phase_duration = self.phase_duration,
            cycles_completed = self.cycles_completed,
            "breathing session started"
        );
        Event::SessionStarted {
            phase_duration: self.phase_duration,
            cycles_completed: self.cycles_completed,
            at: Utc::now(),
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        tracing::debug!(phase = ?self.phase, remaining = self.remaining, "paused");
        Some(Event::SessionPaused {
            phase: self.phase,
            remaining: self.remaining,
            at: Utc::now(),
        })
    }

    /// Continue from the frozen point. No-op while running or before start.
    pub fn resume(&mut self) -> Option<Event> {
        if self.running || !self.phase.is_active() {
            return None;
        }
        self.running = true;
        tracing::debug!(phase = ?self.phase, remaining = self.remaining, "resumed");
        Some(Event::SessionResumed {
            phase: self.phase,
            remaining: self.remaining,
            at: Utc::now(),
        })
    }

    pub fn reset(&mut self) -> Event {
        self.phase = Phase::Ready;
        self.remaining = self.phase_duration;
        self.cycles_completed = 0;
        self.running = false;
        tracing::info!("breathing session reset");
        Event::SessionReset { at: Utc::now() }
    }

    /// Advance one time unit. Performs at most one phase transition.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running || !self.phase.is_active() {
            return None;
        }
        if self.remaining > 1 {
            self.remaining -= 1;
            return None;
        }

        let from = self.phase;
        let to = from.next();
        self.phase = to;
        self.remaining = self.phase_duration;

        if from == Phase::HoldAfterExhale {
            self.cycles_completed += 1;
            tracing::info!(cycles_completed = self.cycles_completed, "breathing cycle completed");
            Some(Event::CycleCompleted {
                cycles_completed: self.cycles_completed,
                at: Utc::now(),
            })
        } else {
            tracing::debug!(?from, ?to, "phase advanced");
            Some(Event::PhaseAdvanced {
                from,
                to,
                at: Utc::now(),
            })
        }
    }
}

impl Default for BreathingSession {
    fn default() -> Self {
        Self {
            phase: Phase::Ready,
            remaining: DEFAULT_PHASE_DURATION,
            phase_duration: DEFAULT_PHASE_DURATION,
            cycles_completed: 0,
            running: false,
        }
    }
}
