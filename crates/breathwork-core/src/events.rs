use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cycle::Phase;

/// Every state change of a session produces an Event.
/// Hosts render from them; variants observe them for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    SessionStarted {
        phase_duration: u32,
        cycles_completed: u64,
        at: DateTime<Utc>,
    },
    SessionPaused {
        phase: Phase,
        remaining: u32,
        at: DateTime<Utc>,
    },
    SessionResumed {
        phase: Phase,
        remaining: u32,
        at: DateTime<Utc>,
    },
    /// Moved into the next phase without closing a cycle.
    PhaseAdvanced {
        from: Phase,
        to: Phase,
        at: DateTime<Utc>,
    },
    /// `HoldAfterExhale -> Inhale`.
    CycleCompleted {
        cycles_completed: u64,
        at: DateTime<Utc>,
    },
    SessionReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        label: String,
        remaining: u32,
        phase_duration: u32,
        cycles_completed: u64,
        running: bool,
        /// Only present for the game variant.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        score: Option<u64>,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Whether this event marks a phase change (including cycle completion).
    pub fn is_transition(&self) -> bool {
        matches!(self, Event::PhaseAdvanced { .. } | Event::CycleCompleted { .. })
    }
}
