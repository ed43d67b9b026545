//! System configuration parameters
//!
//! Watering thresholds and durations, plus the fixtures that drive the
//! host simulation (button schedules and sensor sample sequences).
//! Values can be overridden from a JSON file at startup; a partial file
//! only replaces the fields it names.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maximum number of values in a simulated sensor sequence.
pub const SAMPLE_CAPACITY: usize = 32;
/// Maximum number of press ticks in a simulated button schedule.
pub const SCHEDULE_CAPACITY: usize = 16;

/// Reference soil-moisture sequence (%), read cyclically.
pub const DEFAULT_MOISTURE_SAMPLES: [f32; 14] = [
    42.0, 40.0, 38.5, 36.0, 33.0, 30.0, 27.5, 25.0, 23.0, 35.0, 48.0, 58.0, 66.0, 71.0,
];
/// Reference ambient temperature sequence (°C), read cyclically.
pub const DEFAULT_TEMPERATURE_SAMPLES: [f32; 5] = [27.0, 27.3, 27.5, 27.8, 28.0];
/// Ticks at which the mode-toggle button is pressed.
pub const DEFAULT_MODE_TOGGLE_AT: [u32; 2] = [15, 40];
/// Ticks at which the manual-water button is pressed.
pub const DEFAULT_MANUAL_WATER_AT: [u32; 2] = [18, 22];

/// Watering controller settings. Immutable for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemSettings {
    // --- Moisture thresholds ---
    /// Auto mode starts watering below this moisture (%)
    pub min_moisture_percent: f32,
    /// Auto mode stops watering above this moisture (%)
    pub max_moisture_percent: f32,

    // --- Timing ---
    /// Sensor read interval (seconds)
    pub sensor_read_interval_secs: u32,
    /// Upper bound on an auto watering cycle (seconds)
    pub max_watering_duration_secs: u32,
    /// Length of a manual watering cycle (seconds)
    pub manual_watering_duration_secs: u32,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            min_moisture_percent: 35.0,
            max_moisture_percent: 65.0,
            sensor_read_interval_secs: 5,
            max_watering_duration_secs: 20,
            manual_watering_duration_secs: 10,
        }
    }
}

impl SystemSettings {
    /// Reject settings the controller cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_range = |v: f32| (0.0..=100.0).contains(&v);
        if !in_range(self.min_moisture_percent) || !in_range(self.max_moisture_percent) {
            return Err(ConfigError::ValidationFailed(
                "moisture thresholds must be within 0-100%",
            ));
        }
        if self.min_moisture_percent >= self.max_moisture_percent {
            return Err(ConfigError::ValidationFailed(
                "min_moisture_percent must be below max_moisture_percent",
            ));
        }
        if self.sensor_read_interval_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "sensor_read_interval_secs must be non-zero",
            ));
        }
        if self.max_watering_duration_secs == 0 || self.manual_watering_duration_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "watering durations must be non-zero",
            ));
        }
        Ok(())
    }
}

/// Fixtures for the simulated hardware.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Ticks at which the mode-toggle button reports a press
    pub mode_toggle_at: Vec<u32, SCHEDULE_CAPACITY>,
    /// Ticks at which the manual-water button reports a press
    pub manual_water_at: Vec<u32, SCHEDULE_CAPACITY>,
    /// Soil moisture values (%) returned in order, wrapping
    pub moisture_samples: Vec<f32, SAMPLE_CAPACITY>,
    /// Temperature values (°C) returned in order, wrapping
    pub temperature_samples: Vec<f32, SAMPLE_CAPACITY>,
    /// Wall-clock length of one tick (milliseconds)
    pub tick_period_ms: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            mode_toggle_at: DEFAULT_MODE_TOGGLE_AT.iter().copied().collect(),
            manual_water_at: DEFAULT_MANUAL_WATER_AT.iter().copied().collect(),
            moisture_samples: DEFAULT_MOISTURE_SAMPLES.iter().copied().collect(),
            temperature_samples: DEFAULT_TEMPERATURE_SAMPLES.iter().copied().collect(),
            tick_period_ms: 1000, // 1 Hz
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.moisture_samples.is_empty() || self.temperature_samples.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "sample sequences must not be empty",
            ));
        }
        if self.moisture_samples.iter().any(|m| !(0.0..=100.0).contains(m)) {
            return Err(ConfigError::ValidationFailed(
                "moisture samples must be within 0-100%",
            ));
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ValidationFailed("tick_period_ms must be non-zero"));
        }
        Ok(())
    }
}

/// Top-level configuration loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub settings: SystemSettings,
    pub simulation: SimulationConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.settings.validate()?;
        self.simulation.validate()
    }

    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text).map_err(|_| ConfigError::Corrupted)?;
        config.validate()?;
        Ok(config)
    }
}
