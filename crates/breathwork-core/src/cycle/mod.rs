mod engine;
mod phase;

pub use engine::{BreathingSession, DEFAULT_PHASE_DURATION};
pub use phase::Phase;
