//! Green / yellow / red status LEDs on three push-pull GPIOs.
//!
//! Exactly one LED is lit at a time.  Every update drives all three low
//! before raising the selected one, so a half-applied update can only
//! leave the bank dark, never with two LEDs on.

use embedded_hal::digital::OutputPin;

use crate::alert::LedColour;
use crate::error::ActuatorError;

pub struct LedBank<G, Y, R> {
    green: G,
    yellow: Y,
    red: R,
}

impl<G, Y, R> LedBank<G, Y, R>
where
    G: OutputPin,
    Y: OutputPin,
    R: OutputPin,
{
    pub fn new(green: G, yellow: Y, red: R) -> Self {
        Self {
            green,
            yellow,
            red,
        }
    }

    /// Light `colour` exclusively (`Off` leaves all three dark).
    pub fn set_exclusive(&mut self, colour: LedColour) -> Result<(), ActuatorError> {
        self.green.set_low().map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.yellow.set_low().map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.red.set_low().map_err(|_| ActuatorError::GpioWriteFailed)?;

        match colour {
            LedColour::Off => {}
            LedColour::Green => self.green.set_high().map_err(|_| ActuatorError::GpioWriteFailed)?,
            LedColour::Yellow => self.yellow.set_high().map_err(|_| ActuatorError::GpioWriteFailed)?,
            LedColour::Red => self.red.set_high().map_err(|_| ActuatorError::GpioWriteFailed)?,
        }
        Ok(())
    }
}
