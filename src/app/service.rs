//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the controller state, the settings, and the latest
//! sensor sample.  It exposes one [`tick`](AppService::tick) per loop
//! iteration.  All I/O flows through port traits injected at call sites,
//! making the entire service testable with mock adapters.
//!
//! ```text
//!    ButtonPort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!    SensorPort ──▶ │        AppService         │
//!  ActuatorPort ◀── │  mode · auto/manual step  │
//!                   └──────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::SystemSettings;
use crate::controller::state::{SensorSample, SystemMode, SystemState};
use crate::controller::{self, PumpTransition};

use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, ButtonPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    settings: SystemSettings,
    state: SystemState,
    sample: SensorSample,
    /// False until the first sensor read; forces a read on the first tick
    /// instead of running auto mode against the zeroed startup sample.
    sampled: bool,
    tick_count: u64,
}

impl AppService {
    /// Construct the service with fresh controller state.
    ///
    /// Does **not** touch the outputs; call [`start`](Self::start) next.
    pub fn new(settings: SystemSettings) -> Self {
        let (state, sample) = controller::init_defaults();
        Self {
            settings,
            state,
            sample,
            sampled: false,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Push the initial outputs (pump off, indicator normal).
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started(self.settings));
        info!(
            "AppService started in {:?}: min={:.1}% max={:.1}% sensor={}s auto_max={}s manual={}s",
            self.state.mode,
            self.settings.min_moisture_percent,
            self.settings.max_moisture_percent,
            self.settings.sensor_read_interval_secs,
            self.settings.max_watering_duration_secs,
            self.settings.manual_watering_duration_secs,
        );
        self.apply_outputs(hw, sink);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one loop iteration at tick `now`:
    /// buttons → sensors (if due) → mode step → outputs.
    ///
    /// `hw` implements every hardware port, so one mutable borrow covers
    /// buttons, sensors and actuators.
    pub fn tick(
        &mut self,
        now: u32,
        hw: &mut (impl SensorPort + ButtonPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Mode toggle
        if hw.mode_toggle_pressed(now) {
            let from = self.state.mode;
            let transition = controller::toggle_mode(&mut self.state, hw);
            sink.emit(&AppEvent::ModeChanged {
                from,
                to: self.state.mode,
            });
            Self::report(transition, now, sink);
        }

        // 2. Manual button is only polled in MANUAL
        let manual_pressed = self.state.mode == SystemMode::Manual && hw.manual_water_pressed(now);

        // 3. Sensor read on the configured interval
        if self.sample_due(now) {
            self.sample = SensorSample {
                moisture_percent: hw.read_moisture(),
                temperature_c: hw.read_temperature(),
                captured_at: now,
            };
            self.sampled = true;
            sink.emit(&AppEvent::Telemetry(self.build_telemetry()));
        }

        // 4. Mode step
        let transition = match self.state.mode {
            SystemMode::Auto => controller::run_auto_mode(
                &mut self.state,
                &self.settings,
                &self.sample,
                now,
                hw,
            ),
            SystemMode::Manual => controller::run_manual_mode(
                &mut self.state,
                &self.settings,
                now,
                manual_pressed,
                hw,
            ),
        };
        Self::report(transition, now, sink);

        // 5. Outputs
        self.apply_outputs(hw, sink);

        debug!(
            "tick {} | t={}s mode={:?} pump={:?}",
            self.tick_count, now, self.state.mode, self.state.pump
        );
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current state.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            at: self.sample.captured_at,
            mode: self.state.mode,
            pump: self.state.pump,
            indicator: self.state.indicator,
            moisture_percent: self.sample.moisture_percent,
            temperature_c: self.sample.temperature_c,
        }
    }

    pub fn state(&self) -> &SystemState {
        &self.state
    }

    pub fn settings(&self) -> &SystemSettings {
        &self.settings
    }

    /// Latest sensor sample (zeroed before the first read).
    pub fn last_sample(&self) -> &SensorSample {
        &self.sample
    }

    /// Total ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // ── Internal ──────────────────────────────────────────────

    fn sample_due(&self, now: u32) -> bool {
        !self.sampled
            || now.saturating_sub(self.sample.captured_at) >= self.settings.sensor_read_interval_secs
    }

    fn apply_outputs(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        let from = self.state.indicator;
        let to = controller::apply_outputs(&mut self.state, hw);
        if from != to {
            sink.emit(&AppEvent::IndicatorChanged { from, to });
        }
    }

    fn report(transition: Option<PumpTransition>, now: u32, sink: &mut impl EventSink) {
        match transition {
            Some(PumpTransition::Started(kind)) => {
                sink.emit(&AppEvent::WateringStarted { kind, at: now });
            }
            Some(PumpTransition::Stopped(cause)) => {
                sink.emit(&AppEvent::WateringStopped { cause, at: now });
            }
            None => {}
        }
    }
}
