use std::ops::ControlFlow;

use breathwork_core::{BreathingGame, Config, Event};
use clap::Args;

#[derive(Args)]
pub struct GameArgs {
    /// Stop after this many completed cycles
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(u64).range(1..))]
    pub cycles: u64,
    /// Override the tick interval in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,
    /// Print one JSON snapshot per tick
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: GameArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut game = BreathingGame::from_config(&config.game)?;
    let driver = super::driver_for(&config, args.interval_ms)?;

    game.start();
    if args.json {
        super::print_json(&game.snapshot())?;
    } else {
        println!("Follow the breathing rhythm. Complete cycles to earn points!");
        println!("{:<12} {}", game.session().phase().label(), game.session().remaining());
    }

    let target = args.cycles;
    let mut failure = None;
    super::drive(&mut game, driver, |g, event| {
        if args.json {
            if let Err(err) = super::print_json(&g.snapshot()) {
                failure = Some(err);
                return ControlFlow::Break(());
            }
        } else {
            if let Some(Event::CycleCompleted { .. }) = event {
                println!("+{} points (score {})", g.points_per_cycle(), g.score());
            }
            println!("{:<12} {}", g.session().phase().label(), g.session().remaining());
        }
        if g.session().cycles_completed() >= target {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })?;
    if let Some(err) = failure {
        return Err(err);
    }

    if args.json {
        super::print_json(&game.snapshot())?;
    } else {
        println!(
            "Score: {}  Cycles: {}",
            game.score(),
            game.session().cycles_completed()
        );
    }
    Ok(())
}
