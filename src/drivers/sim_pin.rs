//! Host stand-in for a GPIO output.
//!
//! Implements the `embedded-hal` [`OutputPin`] trait so the real drivers
//! run unchanged on the host.  Records the current level and how many
//! writes reached the pin, which is what tests assert on.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};

#[derive(Debug, Clone)]
pub struct SimPin {
    gpio: i32,
    high: bool,
    writes: u32,
}

impl SimPin {
    pub fn new(gpio: i32) -> Self {
        Self {
            gpio,
            high: false,
            writes: 0,
        }
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    pub fn is_high(&self) -> bool {
        self.high
    }

    /// Number of `set_high`/`set_low` calls since construction.
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        self.writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        self.writes += 1;
        Ok(())
    }
}
