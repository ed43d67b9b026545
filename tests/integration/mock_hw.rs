//! Mock hardware adapter for integration tests.
//!
//! Scripted sensor values and button ticks in, every actuator call
//! recorded out, so tests can assert on the full command history.

use spws::app::events::AppEvent;
use spws::app::ports::{ActuatorPort, ButtonPort, EventSink, SensorPort};
use spws::controller::state::IndicatorState;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    PumpOn,
    PumpOff,
    Indicator(IndicatorState),
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
    /// Moisture returned by every read until changed.
    pub moisture: f32,
    pub temperature: f32,
    pub mode_toggle_at: Vec<u32>,
    pub manual_water_at: Vec<u32>,
    pub moisture_reads: usize,
    pub manual_polls: usize,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new(moisture: f32) -> Self {
        Self {
            calls: Vec::new(),
            moisture,
            temperature: 25.0,
            mode_toggle_at: Vec::new(),
            manual_water_at: Vec::new(),
            moisture_reads: 0,
            manual_polls: 0,
        }
    }

    pub fn with_mode_toggles(mut self, ticks: &[u32]) -> Self {
        self.mode_toggle_at = ticks.to_vec();
        self
    }

    pub fn with_manual_presses(mut self, ticks: &[u32]) -> Self {
        self.manual_water_at = ticks.to_vec();
        self
    }

    pub fn count(&self, call: ActuatorCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    pub fn pump_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::PumpOn => Some(true),
                ActuatorCall::PumpOff => Some(false),
                ActuatorCall::Indicator(_) => None,
            })
            .unwrap_or(false)
    }

    pub fn last_indicator(&self) -> Option<IndicatorState> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::Indicator(s) => Some(*s),
            _ => None,
        })
    }
}

impl SensorPort for MockHardware {
    fn read_moisture(&mut self) -> f32 {
        self.moisture_reads += 1;
        self.moisture
    }

    fn read_temperature(&mut self) -> f32 {
        self.temperature
    }
}

impl ButtonPort for MockHardware {
    fn mode_toggle_pressed(&mut self, now: u32) -> bool {
        self.mode_toggle_at.contains(&now)
    }

    fn manual_water_pressed(&mut self, now: u32) -> bool {
        self.manual_polls += 1;
        self.manual_water_at.contains(&now)
    }
}

impl ActuatorPort for MockHardware {
    fn pump_on(&mut self) {
        self.calls.push(ActuatorCall::PumpOn);
    }

    fn pump_off(&mut self) {
        self.calls.push(ActuatorCall::PumpOff);
    }

    fn set_indicator(&mut self, state: IndicatorState) {
        self.calls.push(ActuatorCall::Indicator(state));
    }
}

// ── Event recorder ────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn watering_events(&self) -> Vec<AppEvent> {
        self.events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    AppEvent::WateringStarted { .. } | AppEvent::WateringStopped { .. }
                )
            })
            .cloned()
            .collect()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
