//! Adafruit Seesaw rotary-encoder breakout.
//!
//! Seesaw registers are addressed as `(module, function)` pairs.  A read is
//! a two-byte register write, a short settle delay, then a plain read.
//!
//! | Module        | Function        | Use                                |
//! |---------------|-----------------|------------------------------------|
//! | GPIO `0x01`   | `0x03` DIRCLR   | make the push-button pin an input  |
//! | GPIO `0x01`   | `0x0B` PULLENSET| enable its pull resistor           |
//! | GPIO `0x01`   | `0x05` BULK_SET | select pull-up                     |
//! | GPIO `0x01`   | `0x04` BULK     | read all pin levels (u32, BE)      |
//! | Encoder `0x11`| `0x30` POSITION | free-running position (i32, BE)    |

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::error::SensorError;

pub const DEFAULT_ADDRESS: u8 = 0x36;
/// Encoder push switch on the Adafruit breakout.
pub const BUTTON_PIN: u8 = 24;

const MOD_GPIO: u8 = 0x01;
const MOD_ENCODER: u8 = 0x11;
const GPIO_DIRCLR_BULK: u8 = 0x03;
const GPIO_BULK: u8 = 0x04;
const GPIO_BULK_SET: u8 = 0x05;
const GPIO_PULLENSET: u8 = 0x0B;
const ENCODER_POSITION: u8 = 0x30;
const READ_SETTLE_US: u32 = 8_000;

pub struct SeesawEncoder<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    button_mask: u32,
}

impl<I2C: I2c, D: DelayNs> SeesawEncoder<I2C, D> {
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            button_mask: 1 << BUTTON_PIN,
        }
    }

    /// Configure the encoder push switch as an input with pull-up.
    pub fn init(&mut self) -> Result<(), SensorError> {
        let mask = self.button_mask.to_be_bytes();
        for func in [GPIO_DIRCLR_BULK, GPIO_PULLENSET, GPIO_BULK_SET] {
            let frame = [MOD_GPIO, func, mask[0], mask[1], mask[2], mask[3]];
            self.i2c
                .write(self.address, &frame)
                .map_err(|_| SensorError::BusFailed)?;
        }
        Ok(())
    }

    /// Current encoder position counter.
    pub fn position(&mut self) -> Result<i32, SensorError> {
        let raw = self.read_u32(MOD_ENCODER, ENCODER_POSITION)?;
        Ok(raw as i32)
    }

    /// Raw level of the push switch (`true` = high = released).
    pub fn button_level(&mut self) -> Result<bool, SensorError> {
        let bulk = self.read_u32(MOD_GPIO, GPIO_BULK)?;
        Ok(bulk & self.button_mask != 0)
    }

    fn read_u32(&mut self, module: u8, func: u8) -> Result<u32, SensorError> {
        self.i2c
            .write(self.address, &[module, func])
            .map_err(|_| SensorError::BusFailed)?;
        self.delay.delay_us(READ_SETTLE_US);
        let mut buf = [0u8; 4];
        self.i2c
            .read(self.address, &mut buf)
            .map_err(|_| SensorError::BusFailed)?;
        Ok(u32::from_be_bytes(buf))
    }
}
