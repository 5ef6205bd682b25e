//! Sensor subsystem — I2C device drivers and the reading types they produce.
//!
//! All devices share one I2C bus.  Each driver is generic over
//! `embedded_hal::i2c::I2c`, so on target they receive an
//! `embedded_hal_bus::i2c::RefCellDevice` and on host a scripted mock.
//!
//! | Driver      | Address | Provides                         |
//! |-------------|---------|----------------------------------|
//! | `aht20`     | 0x38    | temperature (°C), humidity (%RH) |
//! | `apds9960`  | 0x39    | ambient light (green channel)    |
//! | `seesaw`    | 0x36    | encoder position, encoder button |

pub mod aht20;
pub mod apds9960;
pub mod seesaw;

use heapless::Vec;

/// One temperature/humidity sample.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClimateReading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

/// Which input a fallback was applied to.  Carried in events and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Climate,
    AmbientLight,
    Encoder,
    MainButton,
    EncoderButton,
}

impl SensorKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Climate => "climate",
            Self::AmbientLight => "ambient-light",
            Self::Encoder => "encoder",
            Self::MainButton => "main-button",
            Self::EncoderButton => "encoder-button",
        }
    }
}

/// Which sensors are currently failing, so each outage is reported once.
#[derive(Debug, Default)]
pub struct SensorHealth {
    failing: Vec<SensorKind, 5>,
}

impl SensorHealth {
    /// Record a failed read.  Returns `true` if this starts an outage.
    pub fn fail(&mut self, kind: SensorKind) -> bool {
        if self.failing.contains(&kind) {
            return false;
        }
        // One slot per variant.
        let _ = self.failing.push(kind);
        true
    }

    /// Record a good read.  Returns `true` if this ends an outage.
    pub fn recover(&mut self, kind: SensorKind) -> bool {
        match self.failing.iter().position(|k| *k == kind) {
            Some(i) => {
                self.failing.swap_remove(i);
                true
            }
            None => false,
        }
    }
}
