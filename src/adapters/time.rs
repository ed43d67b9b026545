//! Clock adapters.
//!
//! - [`SystemClock`]: wall-clock seconds since construction, backed by
//!   `std::time::Instant` (monotonic).
//! - [`VirtualClock`]: a counter advanced explicitly by the driving loop,
//!   for fast-forward simulation and tests.

use core::cell::Cell;
use std::time::Instant;

use crate::app::ports::ClockPort;

/// Monotonic real-time clock.
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl ClockPort for SystemClock {
    /// Saturates at `u32::MAX` (~136 years).
    fn now_secs(&self) -> u32 {
        u32::try_from(self.start.elapsed().as_secs()).unwrap_or(u32::MAX)
    }
}

/// Manually advanced clock.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Cell<u32>,
}

impl VirtualClock {
    pub fn new(start: u32) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move forward by `secs`, saturating.
    pub fn advance(&self, secs: u32) {
        self.now.set(self.now.get().saturating_add(secs));
    }
}

impl ClockPort for VirtualClock {
    fn now_secs(&self) -> u32 {
        self.now.get()
    }
}
