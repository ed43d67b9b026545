//! Actuator and input drivers.

pub mod button;
pub mod pump;
pub mod sim_pin;
pub mod status_led;
