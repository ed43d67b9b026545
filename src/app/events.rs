//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use crate::config::SystemSettings;
use crate::controller::state::{IndicatorState, PumpState, SystemMode};
use crate::controller::{StopCause, WateringKind};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started (carries the active settings).
    Started(SystemSettings),

    /// A fresh sensor sample was taken.
    Telemetry(TelemetryData),

    /// The operator toggled the mode.
    ModeChanged { from: SystemMode, to: SystemMode },

    /// A watering cycle started (or a manual cycle was re-armed).
    WateringStarted { kind: WateringKind, at: u32 },

    /// The pump stopped.
    WateringStopped { cause: StopCause, at: u32 },

    /// The indicator LED shows a new state.
    IndicatorChanged {
        from: IndicatorState,
        to: IndicatorState,
    },
}

/// A point-in-time snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryData {
    pub at: u32,
    pub mode: SystemMode,
    pub pump: PumpState,
    pub indicator: IndicatorState,
    pub moisture_percent: f32,
    pub temperature_c: f32,
}
