//! APDS9960 colour sensor used as an ambient-light meter.
//!
//! Only the ALS/colour engine is enabled.  The green channel tracks
//! perceived brightness closely enough for display dimming, so that is the
//! value handed to the rest of the firmware.

use embedded_hal::i2c::I2c;

use crate::error::SensorError;

pub const DEFAULT_ADDRESS: u8 = 0x39;

const REG_ENABLE: u8 = 0x80;
const REG_CONTROL: u8 = 0x8F;
const REG_CDATAL: u8 = 0x94;
const ENABLE_PON_AEN: u8 = 0x03;
const CONTROL_AGAIN_4X: u8 = 0x01;

pub struct Apds9960<I2C> {
    i2c: I2C,
    address: u8,
    enabled: bool,
}

impl<I2C: I2c> Apds9960<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            enabled: false,
        }
    }

    /// Power on with the colour engine enabled at 4x gain.
    pub fn init(&mut self) -> Result<(), SensorError> {
        self.write_reg(REG_ENABLE, 0x00)?;
        self.write_reg(REG_CONTROL, CONTROL_AGAIN_4X)?;
        self.write_reg(REG_ENABLE, ENABLE_PON_AEN)?;
        self.enabled = true;
        Ok(())
    }

    /// Raw green-channel count.  Powers the sensor up first if that has
    /// not succeeded yet.
    pub fn read_green(&mut self) -> Result<u16, SensorError> {
        if !self.enabled {
            self.init()?;
        }
        // clear, red, green, blue; 16-bit little-endian each
        let mut block = [0u8; 8];
        self.i2c
            .write_read(self.address, &[REG_CDATAL], &mut block)
            .map_err(|_| SensorError::BusFailed)?;
        Ok(u16::from_le_bytes([block[4], block[5]]))
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), SensorError> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(|_| SensorError::BusFailed)
    }
}
