//! Actuator drivers and input conditioning.

pub mod button;
pub mod buzzer;
pub mod encoder;
pub mod ht16k33;
pub mod led_bank;

#[cfg(test)]
pub(crate) mod mock_hal;
