//! Headless flock runner.
//!
//! Usage: `flocksim [config.json] [ticks]`
//!
//! Runs the flock against an in-memory canvas at the configured tick period
//! and logs a summary every second. Set `RUST_LOG=debug` for per-tick
//! counts.

use flocksim::prelude::*;
use std::process::ExitCode;
use tracing::{error, info};

const CANVAS_WIDTH: f32 = 800.0;
const CANVAS_HEIGHT: f32 = 600.0;
const DEFAULT_TICKS: u64 = 500;

fn main() -> ExitCode {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };
    let ticks: u64 = match args.next() {
        Some(arg) => match arg.parse() {
            Ok(ticks) => ticks,
            Err(e) => {
                error!("Invalid tick count `{}`: {}", arg, e);
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_TICKS,
    };

    match run(config, ticks) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn run(config: SimConfig, ticks: u64) -> Result<(), SimulationError> {
    let mut canvas = RecordingCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    let mut clock = TickClock::new(config.tick_interval());
    let mut sim = Simulation::new(config)?;
    sim.populate(&mut canvas);

    info!(
        boids = sim.registry().len(),
        ticks,
        interval_ms = clock.interval().as_millis() as u64,
        "starting headless run"
    );

    let report_every = (1000 / clock.interval().as_millis().max(1)) as u64;
    while clock.ticks() < ticks {
        std::thread::sleep(clock.time_until_next());
        if !clock.tick_due() {
            continue;
        }

        let summary = sim.tick(&mut canvas);
        let done = clock.mark_tick();
        if report_every > 0 && done % report_every == 0 {
            info!(
                tick = summary.tick,
                flocking = summary.flocking,
                idle = summary.idle,
                wrapped = summary.wrapped,
                rate = clock.tick_rate(),
                "progress"
            );
        }
    }

    if let Some(first) = sim.registry().all().first() {
        info!(boid = %first, "first boid");
    }
    info!(
        ticks = sim.ticks(),
        pushes = canvas.pushes(),
        elapsed_ms = clock.elapsed().as_millis() as u64,
        "run complete"
    );
    Ok(())
}
