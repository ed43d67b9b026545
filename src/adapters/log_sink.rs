//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade, one tagged line per event.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(s) => {
                info!(
                    "START | min={:.1}% max={:.1}% sensor={}s auto_max={}s manual={}s",
                    s.min_moisture_percent,
                    s.max_moisture_percent,
                    s.sensor_read_interval_secs,
                    s.max_watering_duration_secs,
                    s.manual_watering_duration_secs,
                );
            }
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | t={}s | moisture={:.1}% | T={:.1}\u{00b0}C | mode={:?} pump={:?} led={:?}",
                    t.at, t.moisture_percent, t.temperature_c, t.mode, t.pump, t.indicator,
                );
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE | {:?} -> {:?}", from, to);
            }
            AppEvent::WateringStarted { kind, at } => {
                info!("PUMP | {:?} cycle started at t={}s", kind, at);
            }
            AppEvent::WateringStopped { cause, at } => {
                info!("PUMP | stopped at t={}s ({:?})", at, cause);
            }
            AppEvent::IndicatorChanged { from, to } => {
                info!("LED | {} -> {}", from.label(), to.label());
            }
        }
    }
}
