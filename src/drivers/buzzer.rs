//! Passive piezo buzzer on a PWM channel.
//!
//! The carrier frequency is fixed when the PWM timer is configured at
//! boot; this driver only switches the duty.  Duty is expressed on a
//! 16-bit scale (0-65535) and rescaled to the channel's own resolution.

use embedded_hal::pwm::SetDutyCycle;

use crate::error::ActuatorError;

pub struct Buzzer<P> {
    pwm: P,
}

impl<P: SetDutyCycle> Buzzer<P> {
    pub fn new(pwm: P) -> Self {
        Self { pwm }
    }

    /// Set the duty on the 16-bit scale.  `0` silences the buzzer.
    pub fn set_duty(&mut self, duty: u16) -> Result<(), ActuatorError> {
        self.pwm
            .set_duty_cycle_fraction(duty, u16::MAX)
            .map_err(|_| ActuatorError::PwmWriteFailed)
    }

    pub fn off(&mut self) -> Result<(), ActuatorError> {
        self.set_duty(0)
    }
}
