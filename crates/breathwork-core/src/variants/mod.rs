//! Thin consumers of [`BreathingSession`](crate::cycle::BreathingSession).
//!
//! Neither variant owns phase logic. The game turns completed cycles into
//! points; the guided exercise only exposes a start/pause toggle.

mod exercise;
mod game;

pub use exercise::GuidedExercise;
pub use game::{BreathingGame, DEFAULT_POINTS_PER_CYCLE};
