//! Application core — pure domain logic, zero I/O.
//!
//! This module drives the watering controller once per tick: button
//! polling, sensor sampling, the per-mode step, and output application.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
