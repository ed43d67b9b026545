//! Hardware adapter — bridges drivers to domain port traits.
//!
//! Owns the [`SensorHub`], both buttons, the pump and the status LED,
//! exposing them through [`SensorPort`], [`ButtonPort`] and
//! [`ActuatorPort`].  This is the only module in the system that touches
//! the drivers.  On the host every pin is a [`SimPin`].

use embedded_hal::digital::OutputPin;
use log::info;

use crate::app::ports::{ActuatorPort, ButtonPort, SensorPort};
use crate::config::SimulationConfig;
use crate::controller::state::IndicatorState;
use crate::drivers::button::ScheduledButton;
use crate::drivers::pump::PumpDriver;
use crate::drivers::sim_pin::SimPin;
use crate::drivers::status_led::StatusLed;
use crate::error::SequenceError;
use crate::pins;
use crate::sensors::SensorHub;

/// Fully simulated board.
pub type SimulatedHardware = HardwareAdapter<SimPin, SimPin, SimPin>;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<P, R, G> {
    sensors: SensorHub,
    mode_button: ScheduledButton,
    manual_button: ScheduledButton,
    pump: PumpDriver<P>,
    led: StatusLed<R, G>,
}

impl<P: OutputPin, R: OutputPin, G: OutputPin> HardwareAdapter<P, R, G> {
    pub fn new(
        sensors: SensorHub,
        mode_button: ScheduledButton,
        manual_button: ScheduledButton,
        pump: PumpDriver<P>,
        led: StatusLed<R, G>,
    ) -> Self {
        Self {
            sensors,
            mode_button,
            manual_button,
            pump,
            led,
        }
    }

    pub fn pump(&self) -> &PumpDriver<P> {
        &self.pump
    }

    pub fn led(&self) -> &StatusLed<R, G> {
        &self.led
    }
}

impl SimulatedHardware {
    /// Wire up simulated pins, probes and button schedules.
    pub fn simulated(sim: &SimulationConfig) -> Result<Self, SequenceError> {
        Ok(Self::new(
            SensorHub::from_config(sim)?,
            ScheduledButton::new(pins::MODE_BUTTON_GPIO, &sim.mode_toggle_at)?,
            ScheduledButton::new(pins::MANUAL_BUTTON_GPIO, &sim.manual_water_at)?,
            PumpDriver::new(SimPin::new(pins::PUMP_GPIO)),
            StatusLed::new(
                SimPin::new(pins::LED_RED_GPIO),
                SimPin::new(pins::LED_GREEN_GPIO),
            ),
        ))
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<P, R, G> SensorPort for HardwareAdapter<P, R, G> {
    fn read_moisture(&mut self) -> f32 {
        self.sensors.read_moisture()
    }

    fn read_temperature(&mut self) -> f32 {
        self.sensors.read_temperature()
    }
}

// ── ButtonPort implementation ─────────────────────────────────

impl<P, R, G> ButtonPort for HardwareAdapter<P, R, G> {
    fn mode_toggle_pressed(&mut self, now: u32) -> bool {
        let pressed = self.mode_button.pressed(now);
        if pressed {
            info!(
                "BUTTON | mode toggle pressed (gpio {}, t={}s)",
                self.mode_button.gpio(),
                now
            );
        }
        pressed
    }

    fn manual_water_pressed(&mut self, now: u32) -> bool {
        let pressed = self.manual_button.pressed(now);
        if pressed {
            info!(
                "BUTTON | manual water pressed (gpio {}, t={}s)",
                self.manual_button.gpio(),
                now
            );
        }
        pressed
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<P: OutputPin, R: OutputPin, G: OutputPin> ActuatorPort for HardwareAdapter<P, R, G> {
    fn pump_on(&mut self) {
        self.pump.on();
    }

    fn pump_off(&mut self) {
        self.pump.off();
    }

    fn set_indicator(&mut self, state: IndicatorState) {
        self.led.set(state);
    }
}
