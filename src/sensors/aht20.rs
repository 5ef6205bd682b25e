//! AHT20 temperature / relative-humidity sensor.
//!
//! The measurement protocol (trigger, busy wait, CRC, 20-bit conversion) is
//! handled by `embedded-aht20`.  This wrapper owns the bus handle and maps
//! driver errors onto [`SensorError`].
//!
//! `Aht20::new` runs the calibration check, so the driver is built for each
//! measurement: a sensor that was missing at boot comes up on the next read.

use embedded_aht20::Aht20;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::ClimateReading;
use crate::error::SensorError;

pub const DEFAULT_ADDRESS: u8 = 0x38;

pub struct ClimateSensor<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C: I2c, D: DelayNs> ClimateSensor<I2C, D> {
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self { i2c, delay, address }
    }

    /// Run one blocking measurement (~120 ms including the calibration check).
    pub fn read(&mut self) -> Result<ClimateReading, SensorError> {
        let mut aht = Aht20::new(&mut self.i2c, self.address, &mut self.delay).map_err(sensor_error)?;
        let reading = aht.measure().map_err(sensor_error)?;
        Ok(ClimateReading {
            temperature_c: reading.temperature.celcius(),
            humidity_pct: reading.relative_humidity,
        })
    }
}

fn sensor_error<E: embedded_hal::i2c::Error>(e: embedded_aht20::Error<E>) -> SensorError {
    match e {
        embedded_aht20::Error::I2c(_) => SensorError::BusFailed,
        // CRC mismatch or still busy after the conversion delay
        _ => SensorError::NotReady,
    }
}
