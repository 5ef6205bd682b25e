//! HT16K33 backpack driving four 14-segment alphanumeric digits.
//!
//! ## Protocol
//!
//! | Command        | Byte          | Notes                            |
//! |----------------|---------------|----------------------------------|
//! | Oscillator on  | `0x21`        | once at init                     |
//! | Display on     | `0x81`        | blink off                        |
//! | Dimming        | `0xE0 \| n`   | `n` = 0..=15 (1/16 .. 16/16 duty)|
//! | RAM write      | `0x00, d0..`  | two bytes per digit, little-endian|
//!
//! Text is right-aligned: the right-most four glyphs are shown and shorter
//! text is padded with blanks on the left.

use embedded_hal::i2c::I2c;
use log::warn;

use crate::error::ActuatorError;

pub const DEFAULT_ADDRESS: u8 = 0x70;

const CMD_OSCILLATOR_ON: u8 = 0x21;
const CMD_DISPLAY_ON: u8 = 0x81;
const CMD_DIMMING: u8 = 0xE0;
const DIGITS: usize = 4;

/// Segment bit pattern for one character.  Unknown characters render blank.
pub fn glyph(c: char) -> u16 {
    match c.to_ascii_uppercase() {
        '0' => 0x0C3F,
        '1' => 0x0006,
        '2' => 0x00DB,
        '3' => 0x008F,
        '4' => 0x00E6,
        '5' => 0x2069,
        '6' => 0x00FD,
        '7' => 0x0007,
        '8' => 0x00FF,
        '9' => 0x00EF,
        '-' => 0x00C0,
        'A' => 0x00F7,
        'E' => 0x00F9,
        'H' => 0x00F6,
        'L' => 0x0038,
        'O' => 0x003F,
        'R' => 0x20F3,
        'S' => 0x00ED,
        'T' => 0x1201,
        _ => 0x0000,
    }
}

/// Map a 0.0-1.0 brightness fraction onto the 16 dimming steps.
pub fn dimming_level(fraction: f32) -> u8 {
    (fraction.clamp(0.0, 1.0) * 15.0).round() as u8
}

pub struct Seg14x4<I2C> {
    i2c: I2C,
    address: u8,
    /// Last dimming level written, to skip redundant bus traffic.
    dimming: Option<u8>,
}

impl<I2C: I2c> Seg14x4<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            dimming: None,
        }
    }

    /// Start the oscillator, enable the display and blank it.
    pub fn init(&mut self) -> Result<(), ActuatorError> {
        self.command(CMD_OSCILLATOR_ON)?;
        self.command(CMD_DISPLAY_ON)?;
        self.show("")
    }

    pub fn set_brightness(&mut self, fraction: f32) -> Result<(), ActuatorError> {
        let level = dimming_level(fraction);
        if self.dimming == Some(level) {
            return Ok(());
        }
        self.command(CMD_DIMMING | level)?;
        self.dimming = Some(level);
        Ok(())
    }

    pub fn show(&mut self, text: &str) -> Result<(), ActuatorError> {
        let chars = text.chars().count();
        if chars > DIGITS {
            warn!("Display: '{}' wider than {} digits, showing tail", text, DIGITS);
        }

        let mut frame = [0u8; 1 + DIGITS * 2];
        let pad = DIGITS.saturating_sub(chars);
        for (i, c) in text.chars().skip(chars.saturating_sub(DIGITS)).enumerate() {
            let [lo, hi] = glyph(c).to_le_bytes();
            let at = 1 + (pad + i) * 2;
            frame[at] = lo;
            frame[at + 1] = hi;
        }

        self.i2c
            .write(self.address, &frame)
            .map_err(|_| ActuatorError::BusWriteFailed)
    }

    fn command(&mut self, cmd: u8) -> Result<(), ActuatorError> {
        self.i2c
            .write(self.address, &[cmd])
            .map_err(|_| ActuatorError::BusWriteFailed)
    }
}
