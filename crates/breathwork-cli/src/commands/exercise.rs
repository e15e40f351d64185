use std::ops::ControlFlow;

use breathwork_core::{Config, Event, GuidedExercise};
use clap::Args;

#[derive(Args)]
pub struct ExerciseArgs {
    /// Seconds per phase (defaults to exercise.phase_duration)
    #[arg(long)]
    pub duration: Option<u32>,
    /// Stop after this many completed cycles
    #[arg(long, default_value = "4", value_parser = clap::value_parser!(u64).range(1..))]
    pub cycles: u64,
    /// Override the tick interval in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,
    /// Print one JSON snapshot per tick
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ExerciseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let duration = args.duration.unwrap_or(config.exercise.phase_duration);
    let mut exercise = GuidedExercise::new(duration)?;
    let driver = super::driver_for(&config, args.interval_ms)?;

    exercise.start();
    if args.json {
        super::print_json(&exercise.snapshot())?;
    } else {
        println!("{:<12} {}", exercise.session().phase().label(), exercise.session().remaining());
    }

    let target = args.cycles;
    let mut failure = None;
    super::drive(&mut exercise, driver, |e, event| {
        let session = e.session();
        if args.json {
            if let Err(err) = super::print_json(&e.snapshot()) {
                failure = Some(err);
                return ControlFlow::Break(());
            }
        } else {
            if let Some(Event::CycleCompleted { cycles_completed, .. }) = event {
                println!("-- cycle {cycles_completed} complete");
            }
            println!("{:<12} {}", session.phase().label(), session.remaining());
        }
        if session.cycles_completed() >= target {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })?;
    if let Some(err) = failure {
        return Err(err);
    }

    if !args.json {
        println!(
            "Breathing cycles completed: {}",
            exercise.session().cycles_completed()
        );
    }
    Ok(())
}
