//! Scored breathing game.
//!
//! Points come from watching the session's cycle counter, never from inside
//! the phase transition.

use crate::cycle::BreathingSession;
use crate::driver::Tickable;
use crate::error::{CoreError, Result};
use crate::events::Event;
use crate::storage::GameConfig;

pub const DEFAULT_POINTS_PER_CYCLE: u32 = 10;

/// Breathing game: follow the rhythm, earn points per completed cycle.
///
/// Scoring is derived from `cycles_completed` deltas observed after each
/// command, so the session stays unaware of points.
#[derive(Debug, Clone)]
pub struct BreathingGame {
    session: BreathingSession,
    points_per_cycle: u32,
    score: u64,
    observed_cycles: u64,
}

impl BreathingGame {
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfiguration` if either value is 0.
    pub fn new(phase_duration: u32, points_per_cycle: u32) -> Result<Self> {
        if points_per_cycle == 0 {
            return Err(CoreError::invalid(
                "game.points_per_cycle",
                "must award at least 1 point",
            ));
        }
        Ok(Self {
            session: BreathingSession::new(phase_duration)?,
            points_per_cycle,
            score: 0,
            observed_cycles: 0,
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Self::new(config.phase_duration, config.points_per_cycle)
    }

    pub fn session(&self) -> &BreathingSession {
        &self.session
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn points_per_cycle(&self) -> u32 {
        self.points_per_cycle
    }

    pub fn snapshot(&self) -> Event {
        let mut snapshot = self.session.snapshot();
        if let Event::StateSnapshot { score, .. } = &mut snapshot {
            *score = Some(self.score);
        }
        snapshot
    }

    /// Restart from `Inhale`. Score and cycles carry over.
    pub fn start(&mut self) -> Event {
        let event = self.session.start();
        self.observe();
        event
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.session.pause()
    }

    pub fn resume(&mut self) -> Option<Event> {
        self.session.resume()
    }

    /// Single start/pause control: pauses a running game, otherwise
    /// restarts the cycle from the top.
    pub fn toggle(&mut self) -> Option<Event> {
        if self.session.is_running() {
            self.pause()
        } else {
            Some(self.start())
        }
    }

    pub fn reset(&mut self) -> Event {
        let event = self.session.reset();
        self.score = 0;
        self.observed_cycles = 0;
        event
    }

    pub fn tick(&mut self) -> Option<Event> {
        let event = self.session.tick();
        self.observe();
        event
    }

    fn observe(&mut self) {
        let cycles = self.session.cycles_completed();
        if cycles > self.observed_cycles {
            let earned = (cycles - self.observed_cycles).saturating_mul(u64::from(self.points_per_cycle));
            self.score = self.score.saturating_add(earned);
            tracing::debug!(earned, score = self.score, "points awarded");
        }
        self.observed_cycles = cycles;
    }
}

impl Default for BreathingGame {
    fn default() -> Self {
        Self {
            session: BreathingSession::default(),
            points_per_cycle: DEFAULT_POINTS_PER_CYCLE,
            score: 0,
            observed_cycles: 0,
        }
    }
}

impl Tickable for BreathingGame {
    fn tick(&mut self) -> Option<Event> {
        BreathingGame::tick(self)
    }

    fn is_running(&self) -> bool {
        self.session.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::Phase;

    fn ticks(game: &mut BreathingGame, n: usize) {
        for _ in 0..n {
            game.tick();
        }
    }

    #[test]
    fn awards_ten_points_per_cycle() {
        let mut game = BreathingGame::default();
        game.start();
        ticks(&mut game, 15);
        assert_eq!(game.score(), 0);
        game.tick();
        assert_eq!(game.session().cycles_completed(), 1);
        assert_eq!(game.score(), 10);
        ticks(&mut game, 32);
        assert_eq!(game.score(), 30);
    }

    #[test]
    fn toggle_pauses_then_restarts_keeping_score() {
        let mut game = BreathingGame::new(1, 10).unwrap();
        assert!(matches!(game.toggle(), Some(Event::SessionStarted { .. })));
        ticks(&mut game, 6);
        assert_eq!(game.score(), 10);
        assert_eq!(game.session().phase(), Phase::Exhale);

        assert!(matches!(game.toggle(), Some(Event::SessionPaused { .. })));
        ticks(&mut game, 3);
        assert_eq!(game.session().phase(), Phase::Exhale);

        game.toggle();
        assert_eq!(game.session().phase(), Phase::Inhale);
        assert_eq!(game.score(), 10);
        assert_eq!(game.session().cycles_completed(), 1);
    }

    #[test]
    fn reset_clears_score() {
        let mut game = BreathingGame::new(1, 5).unwrap();
        game.start();
        ticks(&mut game, 8);
        assert_eq!(game.score(), 10);
        game.reset();
        assert_eq!(game.score(), 0);
        assert_eq!(game.session().phase(), Phase::Ready);

        game.start();
        ticks(&mut game, 4);
        assert_eq!(game.score(), 5);
    }

    #[test]
    fn score_saturates_instead_of_overflowing() {
        let mut game = BreathingGame::new(1, u32::MAX).unwrap();
        game.score = u64::MAX - 1;
        game.start();
        ticks(&mut game, 4);
        assert_eq!(game.score(), u64::MAX);
    }

    #[test]
    fn rejects_zero_points() {
        assert!(matches!(
            BreathingGame::new(4, 0),
            Err(CoreError::InvalidConfiguration { .. })
        ));
        assert!(BreathingGame::new(0, 10).is_err());
    }

    #[test]
    fn snapshot_carries_score() {
        let mut game = BreathingGame::new(1, 10).unwrap();
        game.start();
        ticks(&mut game, 4);
        match game.snapshot() {
            Event::StateSnapshot { score, cycles_completed, .. } => {
                assert_eq!(score, Some(10));
                assert_eq!(cycles_completed, 1);
            }
            other => panic!("Expected StateSnapshot, got {other:?}"),
        }
    }
}
