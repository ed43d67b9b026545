//! Controller state threaded through every step function.
//!
//! `SystemState` is owned by the driving loop and passed by `&mut` into
//! the controller; nothing here is global.  `SensorSample` is the latest
//! reading, replaced wholesale on every sensor read.

// ---------------------------------------------------------------------------
// Discrete states
// ---------------------------------------------------------------------------

/// Operating mode, toggled by the mode button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemMode {
    Auto,
    Manual,
}

impl SystemMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Auto => Self::Manual,
            Self::Manual => Self::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PumpState {
    Off,
    On,
}

/// Four-valued status indicator shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorState {
    Off,
    /// Normal operation, pump idle.
    Green,
    /// Watering in progress.
    Yellow,
    /// Alert. Representable, never selected by the controller.
    Red,
}

impl IndicatorState {
    pub const NORMAL: Self = Self::Green;
    pub const WATERING: Self = Self::Yellow;

    /// The indicator is a pure function of the pump state.
    pub fn for_pump(pump: PumpState) -> Self {
        match pump {
            PumpState::On => Self::WATERING,
            PumpState::Off => Self::NORMAL,
        }
    }

    /// Operator-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Green => "GREEN (normal)",
            Self::Yellow => "YELLOW (watering)",
            Self::Red => "RED (alert)",
        }
    }
}

// ---------------------------------------------------------------------------
// Sensor sample
// ---------------------------------------------------------------------------

/// The latest sensor reading. No history is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorSample {
    /// Soil moisture (0–100 %).
    pub moisture_percent: f32,
    /// Ambient temperature (°C).
    pub temperature_c: f32,
    /// Tick the sample was captured at.
    pub captured_at: u32,
}

// ---------------------------------------------------------------------------
// SystemState
// ---------------------------------------------------------------------------

/// Mutable controller state.
///
/// Invariant: `pump == On` iff exactly one of `auto_watering_active` /
/// `manual_watering_active` is set.  Every stop path clears both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemState {
    pub mode: SystemMode,
    pub pump: PumpState,
    pub indicator: IndicatorState,
    pub auto_watering_active: bool,
    pub manual_watering_active: bool,
    /// Tick of the most recent pump start, auto or manual.
    pub pump_started_at: u32,
    /// Tick of the most recent manual-water press.
    pub manual_started_at: u32,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            mode: SystemMode::Auto,
            pump: PumpState::Off,
            indicator: IndicatorState::Off,
            auto_watering_active: false,
            manual_watering_active: false,
            pump_started_at: 0,
            manual_started_at: 0,
        }
    }
}

impl SystemState {
    pub fn is_pump_on(&self) -> bool {
        self.pump == PumpState::On
    }

    /// Check the pump/flag invariant.
    pub fn is_consistent(&self) -> bool {
        self.is_pump_on() == (self.auto_watering_active ^ self.manual_watering_active)
    }

    /// Seconds since the pump last started. Saturates if the clock is
    /// behind the stored timestamp.
    pub fn secs_since_pump_start(&self, now: u32) -> u32 {
        now.saturating_sub(self.pump_started_at)
    }

    pub fn secs_since_manual_press(&self, now: u32) -> u32 {
        now.saturating_sub(self.manual_started_at)
    }
}
