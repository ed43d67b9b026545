//! Scheduled push-button driver.
//!
//! Stands in for a debounced momentary switch: instead of sampling a GPIO,
//! the button reports presses at fixed virtual ticks taken from a schedule.
//!
//! A scheduled tick fires at most once.  Polling the same tick again
//! (e.g. two loop iterations inside one slow second) returns `false`.

use heapless::Vec;

use crate::config::SCHEDULE_CAPACITY;
use crate::error::SequenceError;

pub struct ScheduledButton {
    gpio: i32,
    schedule: Vec<u32, SCHEDULE_CAPACITY>,
    last_fired: Option<u32>,
}

impl ScheduledButton {
    /// An empty schedule is allowed and never fires.
    pub fn new(gpio: i32, schedule: &[u32]) -> Result<Self, SequenceError> {
        let schedule = Vec::from_slice(schedule).map_err(|()| SequenceError::TooLong {
            capacity: SCHEDULE_CAPACITY,
        })?;
        Ok(Self {
            gpio,
            schedule,
            last_fired: None,
        })
    }

    /// GPIO pin this button is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// `true` if `now` is a scheduled press not yet reported.
    pub fn pressed(&mut self, now: u32) -> bool {
        if self.last_fired == Some(now) || !self.schedule.contains(&now) {
            return false;
        }
        self.last_fired = Some(now);
        true
    }
}
