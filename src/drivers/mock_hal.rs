//! In-memory `embedded-hal` doubles for driver unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType as PinErrorType, InputPin, OutputPin};
use embedded_hal::i2c::{ErrorKind, ErrorType as I2cErrorType, I2c, Operation};
use embedded_hal::pwm::{ErrorType as PwmErrorType, SetDutyCycle};

// ── I2C ───────────────────────────────────────────────────────

/// Scripted I2C bus: records writes, serves queued read responses.
#[derive(Default)]
pub struct MockI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub responses: VecDeque<Vec<u8>>,
    /// Fail this many upcoming transactions.
    pub fail_next: u32,
}

impl MockI2c {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&mut self, bytes: &[u8]) {
        self.responses.push_back(bytes.to_vec());
    }
}

impl I2cErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        if self.fail_next > 0 {
            self.fail_next -= 1;
            return Err(ErrorKind::Other);
        }
        for op in operations {
            match op {
                Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
                Operation::Read(buf) => {
                    let resp = self.responses.pop_front().unwrap_or_default();
                    let n = resp.len().min(buf.len());
                    buf[..n].copy_from_slice(&resp[..n]);
                }
            }
        }
        Ok(())
    }
}

// ── GPIO ──────────────────────────────────────────────────────

/// Output/input pin whose level is shared with the test body.
#[derive(Clone, Default)]
pub struct MockPin {
    pub high: Rc<Cell<bool>>,
}

impl MockPin {
    pub fn new(high: bool) -> Self {
        Self {
            high: Rc::new(Cell::new(high)),
        }
    }

    pub fn is_set(&self) -> bool {
        self.high.get()
    }
}

impl PinErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high.set(true);
        Ok(())
    }
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

// ── PWM ───────────────────────────────────────────────────────

/// PWM channel with a 16-bit duty range; records every duty written.
#[derive(Clone, Default)]
pub struct MockPwm {
    pub duties: Rc<RefCell<Vec<u16>>>,
}

impl PwmErrorType for MockPwm {
    type Error = Infallible;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        u16::MAX
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duties.borrow_mut().push(duty);
        Ok(())
    }
}

// ── Delay ─────────────────────────────────────────────────────

/// Delay that only accumulates the requested time.
#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
