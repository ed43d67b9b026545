//! Watering controller — mode and pump state machine.
//!
//! ```text
//!            mode button                         mode button
//!   ┌──────┐ ───────────▶ ┌────────┐   ┌──────┐ ───────────▶ ┌──────┐
//!   │ AUTO │  (pump stop) │ MANUAL │   │MANUAL│  (no stop)   │ AUTO │
//!   └──────┘              └────────┘   └──────┘              └──────┘
//!
//!   AUTO:   OFF ──[moisture < min]──▶ ON ──[moisture > max | timeout]──▶ OFF
//!   MANUAL: any ──[button]──▶ ON (re-armed) ──[manual duration]──▶ OFF
//! ```
//!
//! Every function takes the state explicitly and talks to the pump and
//! indicator only through [`ActuatorPort`].  Step functions report what
//! they did as a [`PumpTransition`] so the caller can emit events without
//! diffing state.

pub mod state;

use log::{debug, info};

use crate::app::ports::ActuatorPort;
use crate::config::SystemSettings;
use state::{IndicatorState, PumpState, SensorSample, SystemMode, SystemState};

// ---------------------------------------------------------------------------
// Transition reports
// ---------------------------------------------------------------------------

/// Which trigger started a watering cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WateringKind {
    Auto,
    Manual,
}

/// Why a watering cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCause {
    /// Auto cycle: moisture rose above the upper threshold.
    MoistureReached,
    /// Auto cycle: maximum watering duration elapsed.
    Timeout,
    /// Manual cycle: manual watering duration elapsed.
    ManualDurationElapsed,
    /// Pump force-stopped on the switch to MANUAL.
    ModeSwitch,
}

/// Pump-level outcome of a controller call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpTransition {
    Started(WateringKind),
    Stopped(StopCause),
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

/// Fresh state plus a zeroed sensor sample.
pub fn init_defaults() -> (SystemState, SensorSample) {
    (SystemState::default(), SensorSample::default())
}

fn start_pump(
    state: &mut SystemState,
    kind: WateringKind,
    now: u32,
    hw: &mut impl ActuatorPort,
) -> PumpTransition {
    state.auto_watering_active = kind == WateringKind::Auto;
    state.manual_watering_active = kind == WateringKind::Manual;
    state.pump_started_at = now;
    hw.pump_on();
    state.pump = PumpState::On;
    PumpTransition::Started(kind)
}

/// Stop the pump and clear both watering flags.
///
/// Idempotent: returns `false` without touching the actuator when the
/// pump is already off.  `reason` is logged and has no effect on state.
pub fn stop_pump(state: &mut SystemState, hw: &mut impl ActuatorPort, reason: Option<&str>) -> bool {
    if state.pump == PumpState::Off {
        return false;
    }

    hw.pump_off();
    state.pump = PumpState::Off;
    state.auto_watering_active = false;
    state.manual_watering_active = false;

    if let Some(reason) = reason {
        info!("{}", reason);
    }
    true
}

// ---------------------------------------------------------------------------
// Per-mode steps
// ---------------------------------------------------------------------------

/// One AUTO-mode tick: threshold-driven start, threshold/timeout stop.
pub fn run_auto_mode(
    state: &mut SystemState,
    settings: &SystemSettings,
    sample: &SensorSample,
    now: u32,
    hw: &mut impl ActuatorPort,
) -> Option<PumpTransition> {
    let moisture = sample.moisture_percent;

    match state.pump {
        PumpState::Off => {
            if moisture < settings.min_moisture_percent {
                info!(
                    "AUTO | soil dry ({:.1}% < {:.1}%), starting pump",
                    moisture, settings.min_moisture_percent
                );
                return Some(start_pump(state, WateringKind::Auto, now, hw));
            }
            None
        }
        PumpState::On => {
            let moisture_reached = moisture > settings.max_moisture_percent;
            let timeout_reached =
                state.secs_since_pump_start(now) >= settings.max_watering_duration_secs;

            let cause = if moisture_reached {
                info!("AUTO | moisture reached {:.1}%, stopping pump", moisture);
                StopCause::MoistureReached
            } else if timeout_reached {
                info!(
                    "AUTO | max watering time {}s elapsed, stopping pump",
                    settings.max_watering_duration_secs
                );
                StopCause::Timeout
            } else {
                debug!(
                    "AUTO | watering for {}s, moisture {:.1}%",
                    state.secs_since_pump_start(now),
                    moisture
                );
                return None;
            };

            stop_pump(state, hw, Some("AUTO | watering cycle finished"));
            Some(PumpTransition::Stopped(cause))
        }
    }
}

/// One MANUAL-mode tick.
///
/// A press always (re)starts the pump and re-arms the duration window,
/// even mid-cycle.  The duration check runs afterwards on the same tick.
pub fn run_manual_mode(
    state: &mut SystemState,
    settings: &SystemSettings,
    now: u32,
    manual_pressed: bool,
    hw: &mut impl ActuatorPort,
) -> Option<PumpTransition> {
    let mut transition = None;

    if manual_pressed {
        info!("MANUAL | button pressed, starting pump");
        state.manual_started_at = now;
        transition = Some(start_pump(state, WateringKind::Manual, now, hw));
    }

    if state.manual_watering_active
        && state.pump == PumpState::On
        && state.secs_since_manual_press(now) >= settings.manual_watering_duration_secs
    {
        info!(
            "MANUAL | {}s watering elapsed, stopping pump",
            settings.manual_watering_duration_secs
        );
        stop_pump(state, hw, Some("MANUAL | watering cycle finished"));
        transition = Some(PumpTransition::Stopped(StopCause::ManualDurationElapsed));
    }

    transition
}

// ---------------------------------------------------------------------------
// Mode switching and outputs
// ---------------------------------------------------------------------------

/// Flip AUTO ↔ MANUAL.
///
/// Entering MANUAL force-stops the pump so manual mode never inherits an
/// auto cycle.  Returning to AUTO does not stop anything.
pub fn toggle_mode(state: &mut SystemState, hw: &mut impl ActuatorPort) -> Option<PumpTransition> {
    state.mode = state.mode.toggled();
    info!("MODE | -> {:?}", state.mode);

    if state.mode == SystemMode::Manual
        && stop_pump(state, hw, Some("MODE | switched to MANUAL, pump stopped"))
    {
        return Some(PumpTransition::Stopped(StopCause::ModeSwitch));
    }
    None
}

/// Derive the indicator from the pump state and push it to the sink.
pub fn apply_outputs(state: &mut SystemState, hw: &mut impl ActuatorPort) -> IndicatorState {
    let target = IndicatorState::for_pump(state.pump);
    state.indicator = target;
    hw.set_indicator(target);
    target
}
