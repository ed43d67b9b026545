//! SPWS — Smart Plant Watering System, host simulator.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                   │
//! │                                                            │
//! │  SimulatedHardware   LogEventSink   JsonFileConfig         │
//! │  (Sensor+Button+     (EventSink)    (ConfigPort)           │
//! │   Actuator)          SystemClock / VirtualClock (Clock)    │
//! │                                                            │
//! │  ──────────────── Port Trait Boundary ───────────────      │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────┐      │
//! │  │          AppService (pure logic)                 │      │
//! │  │  mode toggle · auto step · manual step · outputs │      │
//! │  └──────────────────────────────────────────────────┘      │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage: `spws [CONFIG.json] [--ticks N] [--fast]`
//!
//! Without `--ticks` the loop runs until the process is killed.  `--fast`
//! replaces the wall clock with a virtual one advanced one second per
//! iteration, with no sleeping.
#![deny(unused_must_use)]

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::info;
use tracing_subscriber::EnvFilter;

use spws::adapters::config_file::JsonFileConfig;
use spws::adapters::hardware::SimulatedHardware;
use spws::adapters::log_sink::LogEventSink;
use spws::adapters::time::{SystemClock, VirtualClock};
use spws::app::ports::{ClockPort, ConfigPort};
use spws::app::service::AppService;

/// Environment variable holding the log filter (`info` when unset).
const LOG_FILTER_ENV: &str = "SPWS_LOG";

// ── Command line ──────────────────────────────────────────────

#[derive(Parser, Debug, PartialEq)]
#[command(name = "spws", version)]
#[command(about = "Smart plant watering controller, simulated board", long_about = None)]
struct Args {
    /// JSON config file; built-in defaults when omitted.
    config: Option<PathBuf>,

    /// Stop after this many ticks instead of running forever.
    #[arg(long)]
    ticks: Option<u64>,

    /// Virtual clock, one second per tick, no sleeping.
    #[arg(long)]
    fast: bool,
}

// ── Main ──────────────────────────────────────────────────────

/// Install the global subscriber; `log` records reach it via `tracing-log`.
fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| "info".into()),
        )
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("failed to install logger")
}

fn main() -> Result<()> {
    init_logging()?;

    let args = Args::parse();

    info!("SPWS v{}", env!("CARGO_PKG_VERSION"));

    // ── 1. Configuration ──────────────────────────────────────
    let config = JsonFileConfig::new(args.config.clone())
        .load()
        .with_context(|| match &args.config {
            Some(path) => format!("failed to load config from {}", path.display()),
            None => "invalid default config".to_string(),
        })?;

    // ── 2. Hardware + service ─────────────────────────────────
    let mut hw = SimulatedHardware::simulated(&config.simulation)
        .context("invalid simulation fixtures")?;
    let mut sink = LogEventSink::new();
    let mut app = AppService::new(config.settings);
    app.start(&mut hw, &mut sink);

    // ── 3. Control loop ───────────────────────────────────────
    let period = Duration::from_millis(u64::from(config.simulation.tick_period_ms));
    if args.fast {
        let clock = VirtualClock::new(0);
        run(&mut app, &mut hw, &mut sink, &clock, args.ticks, || {
            clock.advance(1);
        });
    } else {
        let clock = SystemClock::new();
        run(&mut app, &mut hw, &mut sink, &clock, args.ticks, || {
            std::thread::sleep(period);
        });
    }

    info!("Stopped after {} ticks", app.tick_count());
    Ok(())
}

/// Poll the clock, tick the service, wait; repeat.
fn run(
    app: &mut AppService,
    hw: &mut SimulatedHardware,
    sink: &mut LogEventSink,
    clock: &impl ClockPort,
    max_ticks: Option<u64>,
    mut wait: impl FnMut(),
) {
    loop {
        app.tick(clock.now_secs(), hw, sink);
        if max_ticks.is_some_and(|max| app.tick_count() >= max) {
            return;
        }
        wait();
    }
}
