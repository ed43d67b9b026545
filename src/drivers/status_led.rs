//! Bi-colour status LED driver.
//!
//! Two GPIOs drive the red and green dies of a common-cathode LED:
//!
//! | Indicator | Red | Green |
//! |-----------|-----|-------|
//! | Off       |  0  |   0   |
//! | Green     |  0  |   1   |
//! | Yellow    |  1  |   1   |
//! | Red       |  1  |   0   |
//!
//! Setting the indicator to its current value is a no-op.

use embedded_hal::digital::{OutputPin, PinState};
use log::{info, warn};

use crate::controller::state::IndicatorState;

pub struct StatusLed<R, G> {
    red: R,
    green: G,
    current: IndicatorState,
}

impl<R: OutputPin, G: OutputPin> StatusLed<R, G> {
    pub fn new(red: R, green: G) -> Self {
        let mut led = Self {
            red,
            green,
            current: IndicatorState::Off,
        };
        led.write_pins(IndicatorState::Off);
        led
    }

    pub fn set(&mut self, state: IndicatorState) {
        if self.current == state {
            return;
        }
        self.write_pins(state);
        self.current = state;
        info!("LED | -> {}", state.label());
    }

    pub fn current(&self) -> IndicatorState {
        self.current
    }

    pub fn pins(&self) -> (&R, &G) {
        (&self.red, &self.green)
    }

    fn write_pins(&mut self, state: IndicatorState) {
        let (red, green) = match state {
            IndicatorState::Off => (false, false),
            IndicatorState::Green => (false, true),
            IndicatorState::Yellow => (true, true),
            IndicatorState::Red => (true, false),
        };
        if let Err(e) = self.red.set_state(PinState::from(red)) {
            warn!("LED | red write failed: {:?}", e);
        }
        if let Err(e) = self.green.set_state(PinState::from(green)) {
            warn!("LED | green write failed: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::sim_pin::SimPin;
    use crate::pins;

    fn make_led() -> StatusLed<SimPin, SimPin> {
        StatusLed::new(SimPin::new(pins::LED_RED_GPIO), SimPin::new(pins::LED_GREEN_GPIO))
    }

    fn levels(led: &StatusLed<SimPin, SimPin>) -> (bool, bool) {
        let (r, g) = led.pins();
        (r.is_high(), g.is_high())
    }

    #[test]
    fn colour_mapping() {
        let mut led = make_led();
        assert_eq!(levels(&led), (false, false));
        led.set(IndicatorState::Green);
        assert_eq!(levels(&led), (false, true));
        led.set(IndicatorState::Yellow);
        assert_eq!(levels(&led), (true, true));
        led.set(IndicatorState::Red);
        assert_eq!(levels(&led), (true, false));
        led.set(IndicatorState::Off);
        assert_eq!(levels(&led), (false, false));
    }

    #[test]
    fn same_state_writes_nothing() {
        let mut led = make_led();
        led.set(IndicatorState::Green);
        let writes = led.pins().1.writes();
        led.set(IndicatorState::Green);
        assert_eq!(led.pins().1.writes(), writes);
        assert_eq!(led.current(), IndicatorState::Green);
    }
}
