//! GPIO pin assignments for the SPWS controller board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  On the host the numbers only label the
//! simulated pins in log output.

// ---------------------------------------------------------------------------
// Pump (relay / MOSFET gate)
// ---------------------------------------------------------------------------

/// Digital output: HIGH = pump running.
pub const PUMP_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Status LED (bi-colour, common cathode)
// ---------------------------------------------------------------------------

/// Red die. Red + green together read as yellow.
pub const LED_RED_GPIO: i32 = 12;
pub const LED_GREEN_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// Push buttons (active-low, external pull-up)
// ---------------------------------------------------------------------------

/// AUTO ↔ MANUAL toggle.
pub const MODE_BUTTON_GPIO: i32 = 16;
/// Manual watering trigger.
pub const MANUAL_BUTTON_GPIO: i32 = 17;
