use serde::{Deserialize, Serialize};

/// A segment of the breathing cycle.
///
/// `Ready` is the idle state before the first `start()`; the other four
/// repeat in a fixed order for as long as the session runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Ready,
    Inhale,
    HoldAfterInhale,
    Exhale,
    HoldAfterExhale,
}

impl Phase {
    /// The four active phases in cycle order.
    pub const CYCLE: [Phase; 4] = [
        Phase::Inhale,
        Phase::HoldAfterInhale,
        Phase::Exhale,
        Phase::HoldAfterExhale,
    ];

    /// Successor in the cycle. `Ready` leads into `Inhale`.
    pub fn next(self) -> Phase {
        match self {
            Phase::Ready => Phase::Inhale,
            Phase::Inhale => Phase::HoldAfterInhale,
            Phase::HoldAfterInhale => Phase::Exhale,
            Phase::Exhale => Phase::HoldAfterExhale,
            Phase::HoldAfterExhale => Phase::Inhale,
        }
    }

    pub fn is_active(self) -> bool {
        self != Phase::Ready
    }

    pub fn is_hold(self) -> bool {
        matches!(self, Phase::HoldAfterInhale | Phase::HoldAfterExhale)
    }

    /// Position within the cycle (0..4), `None` for `Ready`.
    pub fn cycle_index(self) -> Option<usize> {
        Phase::CYCLE.iter().position(|p| *p == self)
    }

    /// Text shown to the user for this phase.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Ready => "Ready to Begin",
            Phase::Inhale => "Breathe In",
            Phase::HoldAfterInhale | Phase::HoldAfterExhale => "Hold",
            Phase::Exhale => "Breathe Out",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
