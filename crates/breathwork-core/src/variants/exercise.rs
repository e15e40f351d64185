//! Guided breathing exercise.
//!
//! Paces the cycle at a configurable phase length and keeps no score.

use crate::cycle::{BreathingSession, Phase};
use crate::driver::Tickable;
use crate::error::Result;
use crate::events::Event;
use crate::storage::ExerciseConfig;

/// Guided breathing exercise with a configurable phase length. No scoring.
#[derive(Debug, Clone, Default)]
pub struct GuidedExercise {
    session: BreathingSession,
}

impl GuidedExercise {
    pub fn new(phase_duration: u32) -> Result<Self> {
        Ok(Self {
            session: BreathingSession::new(phase_duration)?,
        })
    }

    pub fn from_config(config: &ExerciseConfig) -> Result<Self> {
        Self::new(config.phase_duration)
    }

    pub fn session(&self) -> &BreathingSession {
        &self.session
    }

    pub fn snapshot(&self) -> Event {
        self.session.snapshot()
    }

    pub fn start(&mut self) -> Event {
        self.session.start()
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.session.pause()
    }

    pub fn resume(&mut self) -> Option<Event> {
        self.session.resume()
    }

    /// Start when idle, otherwise flip between paused and running without
    /// losing the current position.
    pub fn toggle(&mut self) -> Option<Event> {
        if self.session.phase() == Phase::Ready {
            Some(self.session.start())
        } else if self.session.is_running() {
            self.session.pause()
        } else {
            self.session.resume()
        }
    }

    pub fn reset(&mut self) -> Event {
        self.session.reset()
    }

    pub fn tick(&mut self) -> Option<Event> {
        self.session.tick()
    }
}

impl Tickable for GuidedExercise {
    fn tick(&mut self) -> Option<Event> {
        GuidedExercise::tick(self)
    }

    fn is_running(&self) -> bool {
        self.session.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_duration_drives_the_countdown() {
        let mut exercise = GuidedExercise::new(6).unwrap();
        exercise.start();
        for _ in 0..6 {
            exercise.tick();
        }
        assert_eq!(exercise.session().phase(), Phase::HoldAfterInhale);
        assert_eq!(exercise.session().remaining(), 6);
    }

    #[test]
    fn toggle_resumes_from_frozen_point() {
        let mut exercise = GuidedExercise::default();
        assert_eq!(exercise.session().phase_duration(), 4);
        assert!(matches!(exercise.toggle(), Some(Event::SessionStarted { .. })));
        for _ in 0..5 {
            exercise.tick();
        }
        assert_eq!(exercise.session().phase(), Phase::HoldAfterInhale);
        assert_eq!(exercise.session().remaining(), 3);

        assert!(matches!(exercise.toggle(), Some(Event::SessionPaused { .. })));
        exercise.tick();
        assert!(matches!(exercise.toggle(), Some(Event::SessionResumed { .. })));
        assert_eq!(exercise.session().phase(), Phase::HoldAfterInhale);
        assert_eq!(exercise.session().remaining(), 3);
    }

    #[test]
    fn reset_returns_to_ready() {
        let mut exercise = GuidedExercise::new(2).unwrap();
        exercise.start();
        for _ in 0..9 {
            exercise.tick();
        }
        assert_eq!(exercise.session().cycles_completed(), 1);
        exercise.reset();
        assert_eq!(exercise.session(), &BreathingSession::new(2).unwrap());
    }

    #[test]
    fn zero_duration_is_rejected() {
        assert!(GuidedExercise::new(0).is_err());
    }
}
