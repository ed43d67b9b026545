//! Water pump driver (relay or logic-level MOSFET on one GPIO).
//!
//! ## Idempotence
//!
//! On/off commands are compared against the last applied state; a repeat
//! command writes nothing and logs nothing.  The controller relies on this
//! when a manual press re-arms an already running pump.
//!
//! ## Dual-target design
//!
//! Generic over an `embedded-hal` [`OutputPin`].  On the host the pin is a
//! [`SimPin`](super::sim_pin::SimPin).

use embedded_hal::digital::OutputPin;
use log::{info, warn};

use crate::controller::state::PumpState;

pub struct PumpDriver<P> {
    pin: P,
    state: PumpState,
}

impl<P: OutputPin> PumpDriver<P> {
    /// Take ownership of the pin and drive it low so the pump can never
    /// start on boot.
    pub fn new(mut pin: P) -> Self {
        if let Err(e) = pin.set_low() {
            warn!("PUMP | init write failed: {:?}", e);
        }
        Self {
            pin,
            state: PumpState::Off,
        }
    }

    pub fn on(&mut self) {
        if self.state == PumpState::On {
            return;
        }
        match self.pin.set_high() {
            Ok(()) => {
                self.state = PumpState::On;
                info!("PUMP | ON");
            }
            Err(e) => warn!("PUMP | on write failed: {:?}", e),
        }
    }

    pub fn off(&mut self) {
        if self.state == PumpState::Off {
            return;
        }
        match self.pin.set_low() {
            Ok(()) => {
                self.state = PumpState::Off;
                info!("PUMP | OFF");
            }
            Err(e) => warn!("PUMP | off write failed: {:?}", e),
        }
    }

    pub fn state(&self) -> PumpState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PumpState::On
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }
}
