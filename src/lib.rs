//! SPWS — Smart Plant Watering System.
//!
//! Exposes the controller, the application service and the simulated
//! hardware adapters for integration testing and the host simulator.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod controller;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod sensors;
