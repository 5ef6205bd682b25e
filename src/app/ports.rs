//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ DeskService (domain)
//! ```
//!
//! Driven adapters (sensors, inputs, actuators, clock, event sinks)
//! implement these traits.  The [`DeskService`](super::service::DeskService)
//! consumes them via generics, so the domain core never touches hardware
//! directly and tests can substitute recording fakes.
//!
//! Every fallible read returns a typed [`SensorError`]; the service decides
//! per sensor whether to hold, substitute, or ignore.

use crate::alert::LedColour;
use crate::error::{ActuatorError, SensorError};
use crate::sensors::ClimateReading;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Slow environmental sensors, read on the sensor-refresh timer.
pub trait SensorPort {
    /// Temperature (°C) and relative humidity (%).
    fn read_climate(&mut self) -> Result<ClimateReading, SensorError>;

    /// Raw ambient-light intensity (roughly 0–300 indoors).
    fn read_ambient_light(&mut self) -> Result<u16, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: user controls → domain)
// ───────────────────────────────────────────────────────────────

/// User controls, sampled on every tick.
///
/// Button levels are raw: `true` = high = released (active-low wiring).
pub trait InputPort {
    /// Free-running encoder counter.  Only deltas are meaningful.
    fn encoder_position(&mut self) -> Result<i32, SensorError>;

    fn main_button_level(&mut self) -> Result<bool, SensorError>;

    fn encoder_button_level(&mut self) -> Result<bool, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command outputs.
pub trait ActuatorPort {
    /// Light exactly one status LED (or none), clearing the others first.
    fn set_led(&mut self, colour: LedColour) -> Result<(), ActuatorError>;

    /// Buzzer duty on a 16-bit scale; `0` silences it.
    fn set_buzzer(&mut self, duty: u16) -> Result<(), ActuatorError>;

    /// Display brightness as a fraction in `0.0..=1.0`.
    fn set_display_brightness(&mut self, fraction: f32) -> Result<(), ActuatorError>;

    /// Show already-formatted text on the 4-character display.
    fn render_display(&mut self, text: &str) -> Result<(), ActuatorError>;
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic time source plus the blocking sleep used for pacing and
/// buzzer pulses.
///
/// `now_ms` must never go backwards and must not follow wall-clock
/// adjustments.  A fake clock advances its own time inside `delay_ms`.
pub trait ClockPort {
    /// Milliseconds since an arbitrary fixed origin (usually boot).
    fn now_ms(&self) -> u64;

    /// Block for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
