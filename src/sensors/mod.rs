//! Sensor subsystem — simulated soil-moisture and temperature probes.
//!
//! The hub owns one [`CyclicSource`] per probe.  Each probe keeps its own
//! position and only advances when it is read.

pub mod cyclic;

use log::debug;

use crate::config::SimulationConfig;
use crate::error::SequenceError;
use cyclic::CyclicSource;

/// Aggregates the two probes.
#[derive(Debug, Clone)]
pub struct SensorHub {
    pub moisture: CyclicSource,
    pub temperature: CyclicSource,
}

impl SensorHub {
    pub fn new(moisture: CyclicSource, temperature: CyclicSource) -> Self {
        Self {
            moisture,
            temperature,
        }
    }

    /// Build the hub from the configured sample sequences.
    pub fn from_config(sim: &SimulationConfig) -> Result<Self, SequenceError> {
        Ok(Self::new(
            CyclicSource::new(&sim.moisture_samples)?,
            CyclicSource::new(&sim.temperature_samples)?,
        ))
    }

    /// Soil moisture (%).
    pub fn read_moisture(&mut self) -> f32 {
        let value = self.moisture.read();
        debug!("SENSOR | moisture={:.1}%", value);
        value
    }

    /// Ambient temperature (°C).
    pub fn read_temperature(&mut self) -> f32 {
        let value = self.temperature.read();
        debug!("SENSOR | temperature={:.1}C", value);
        value
    }
}
