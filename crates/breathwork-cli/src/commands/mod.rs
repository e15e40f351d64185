pub mod config;
pub mod exercise;
pub mod game;
pub mod simulate;

use std::ops::ControlFlow;

use breathwork_core::{Config, Event, TickDriver, Tickable};
use tokio::sync::watch;

/// Pick the tick driver: explicit `--interval-ms` wins over the config file.
fn driver_for(config: &Config, interval_ms: Option<u64>) -> Result<TickDriver, Box<dyn std::error::Error>> {
    let driver = match interval_ms {
        Some(ms) => TickDriver::from_millis(ms)?,
        None => config.driver()?,
    };
    Ok(driver)
}

/// Drive `target` in real time until `on_tick` breaks or Ctrl-C is pressed.
fn drive<T, F>(target: &mut T, driver: TickDriver, on_tick: F) -> Result<u64, Box<dyn std::error::Error>>
where
    T: Tickable,
    F: FnMut(&T, Option<&Event>) -> ControlFlow<()>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let delivered = runtime.block_on(async {
        let (tx, rx) = watch::channel(false);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupted");
                let _ = tx.send(true);
            }
        });
        driver.run(target, rx, on_tick).await
    });
    Ok(delivered)
}

fn print_json(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}
