//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (clock, sensors, buttons, actuators, event sinks, config)
//! implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly and tests can inject deterministic fixtures.
//!
//! Side-effecting calls are fire-and-forget: the core treats them as
//! always succeeding.

use crate::config::Config;
use crate::controller::state::IndicatorState;
use crate::error::ConfigError;

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Seconds since controller start.  Must be monotonically non-decreasing;
/// the core only ever subtracts previously stored timestamps from it.
pub trait ClockPort {
    fn now_secs(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain sensor data.
pub trait SensorPort {
    /// Soil moisture, 0–100 %.
    fn read_moisture(&mut self) -> f32;

    /// Ambient temperature, °C.
    fn read_temperature(&mut self) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Button port (driven adapter: operator → domain)
// ───────────────────────────────────────────────────────────────

/// Polled push buttons.  Each method reports a press at most once per
/// distinct `now` value.
pub trait ButtonPort {
    /// AUTO ↔ MANUAL toggle.
    fn mode_toggle_pressed(&mut self, now: u32) -> bool;

    /// Start (or re-arm) a manual watering cycle.
    fn manual_water_pressed(&mut self, now: u32) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
///
/// Implementations suppress redundant writes, so callers may repeat the
/// current command freely.
pub trait ActuatorPort {
    fn pump_on(&mut self);

    fn pump_off(&mut self);

    /// Show a status on the indicator LED.
    fn set_indicator(&mut self, state: IndicatorState);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: storage → domain)
// ───────────────────────────────────────────────────────────────

/// Loads configuration once at startup.
///
/// Implementations MUST validate before returning; invalid ranges are
/// rejected with [`ConfigError::ValidationFailed`], not silently clamped.
pub trait ConfigPort {
    fn load(&self) -> Result<Config, ConfigError>;
}
