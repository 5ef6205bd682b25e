//! Unified error types for the DeskThermo firmware.
//!
//! A single `Error` enum that every subsystem can convert into, keeping the
//! poll loop's error handling uniform.  All variants are `Copy` so they can be
//! passed through the service and event sink without allocation.
//!
//! Sensor and actuator failures are never fatal to the loop: the service
//! substitutes a fallback or last-known value and keeps ticking.  Only
//! peripheral bring-up (`Init`) and a bad compiled-in configuration
//! (`Config`) stop the firmware, and both happen before the loop starts.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A sensor could not be read or returned implausible data.
    Sensor(SensorError),
    /// An actuator (LED, buzzer, display) write failed.
    Actuator(ActuatorError),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Configuration failed validation.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Actuator(e) => write!(f, "actuator: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// I2C transaction failed (NAK, arbitration loss, timeout).
    BusFailed,
    /// The device has not finished a conversion yet.
    NotReady,
    /// Reading is outside the physically plausible range.
    OutOfRange,
    /// The device is not fitted or was never initialised.
    Unavailable,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BusFailed => write!(f, "bus transaction failed"),
            Self::NotReady => write!(f, "conversion not ready"),
            Self::OutOfRange => write!(f, "reading out of range"),
            Self::Unavailable => write!(f, "sensor unavailable"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// GPIO set failed.
    GpioWriteFailed,
    /// PWM duty-cycle write failed.
    PwmWriteFailed,
    /// I2C write to the display controller failed.
    BusWriteFailed,
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
            Self::PwmWriteFailed => write!(f, "PWM write failed"),
            Self::BusWriteFailed => write!(f, "display bus write failed"),
        }
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

impl std::error::Error for Error {}
impl std::error::Error for SensorError {}
impl std::error::Error for ActuatorError {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
