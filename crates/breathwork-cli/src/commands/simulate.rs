use breathwork_core::{BreathingGame, Config, Event, GuidedExercise};
use clap::Args;

#[derive(Args)]
pub struct SimulateArgs {
    /// Seconds per phase (defaults to the configured value for the variant)
    #[arg(long)]
    pub duration: Option<u32>,
    /// Number of ticks to apply after starting
    #[arg(long, default_value = "16")]
    pub ticks: u64,
    /// Pause after this many ticks
    #[arg(long)]
    pub pause_at: Option<u64>,
    /// Resume after this many ticks
    #[arg(long)]
    pub resume_at: Option<u64>,
    /// Simulate the scored game instead of the guided exercise
    #[arg(long)]
    pub game: bool,
}

/// The subset of commands shared by both variants.
trait Simulated {
    fn start(&mut self) -> Event;
    fn pause(&mut self) -> Option<Event>;
    fn resume(&mut self) -> Option<Event>;
    fn tick(&mut self) -> Option<Event>;
    fn snapshot(&self) -> Event;
}

impl Simulated for GuidedExercise {
    fn start(&mut self) -> Event {
        GuidedExercise::start(self)
    }
    fn pause(&mut self) -> Option<Event> {
        GuidedExercise::pause(self)
    }
    fn resume(&mut self) -> Option<Event> {
        GuidedExercise::resume(self)
    }
    fn tick(&mut self) -> Option<Event> {
        GuidedExercise::tick(self)
    }
    fn snapshot(&self) -> Event {
        GuidedExercise::snapshot(self)
    }
}

impl Simulated for BreathingGame {
    fn start(&mut self) -> Event {
        BreathingGame::start(self)
    }
    fn pause(&mut self) -> Option<Event> {
        BreathingGame::pause(self)
    }
    fn resume(&mut self) -> Option<Event> {
        BreathingGame::resume(self)
    }
    fn tick(&mut self) -> Option<Event> {
        BreathingGame::tick(self)
    }
    fn snapshot(&self) -> Event {
        BreathingGame::snapshot(self)
    }
}

fn step<S: Simulated>(target: &mut S, args: &SimulateArgs) -> Vec<Event> {
    target.start();
    let mut snapshots = vec![target.snapshot()];
    for n in 1..=args.ticks {
        if args.pause_at == Some(n - 1) {
            target.pause();
        }
        if args.resume_at == Some(n - 1) {
            target.resume();
        }
        target.tick();
        snapshots.push(target.snapshot());
    }
    snapshots
}

pub fn run(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let snapshots = if args.game {
        let duration = args.duration.unwrap_or(config.game.phase_duration);
        let mut game = BreathingGame::new(duration, config.game.points_per_cycle)?;
        step(&mut game, &args)
    } else {
        let duration = args.duration.unwrap_or(config.exercise.phase_duration);
        let mut exercise = GuidedExercise::new(duration)?;
        step(&mut exercise, &args)
    };
    println!("{}", serde_json::to_string_pretty(&snapshots)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use breathwork_core::Phase;

    fn args(ticks: u64, pause_at: Option<u64>, resume_at: Option<u64>) -> SimulateArgs {
        SimulateArgs {
            duration: Some(4),
            ticks,
            pause_at,
            resume_at,
            game: false,
        }
    }

    fn phase_and_remaining(event: &Event) -> (Phase, u32) {
        match event {
            Event::StateSnapshot { phase, remaining, .. } => (*phase, *remaining),
            other => panic!("Expected StateSnapshot, got {other:?}"),
        }
    }

    #[test]
    fn one_snapshot_per_tick_plus_start() {
        let mut exercise = GuidedExercise::new(4).unwrap();
        let snapshots = step(&mut exercise, &args(16, None, None));
        assert_eq!(snapshots.len(), 17);
        assert_eq!(phase_and_remaining(&snapshots[0]), (Phase::Inhale, 4));
        assert_eq!(phase_and_remaining(&snapshots[4]), (Phase::HoldAfterInhale, 4));
        assert_eq!(exercise.session().cycles_completed(), 1);
    }

    #[test]
    fn pause_window_freezes_the_countdown() {
        let mut exercise = GuidedExercise::new(4).unwrap();
        let snapshots = step(&mut exercise, &args(17, Some(10), Some(15)));
        assert_eq!(phase_and_remaining(&snapshots[10]), (Phase::Exhale, 2));
        assert_eq!(phase_and_remaining(&snapshots[15]), (Phase::Exhale, 2));
        assert_eq!(phase_and_remaining(&snapshots[17]), (Phase::HoldAfterExhale, 4));
    }
}
