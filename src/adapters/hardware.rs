//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns every device driver and exposes them through [`SensorPort`],
//! [`InputPort`] and [`ActuatorPort`].  This is the only module in the
//! system that touches actual hardware.  All I2C devices share one bus, so
//! they are generic over the same device type (an `embedded-hal-bus`
//! `RefCellDevice` on target).

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::i2c::I2c;
use embedded_hal::pwm::SetDutyCycle;
use log::{info, warn};

use crate::alert::LedColour;
use crate::app::ports::{ActuatorPort, InputPort, SensorPort};
use crate::drivers::buzzer::Buzzer;
use crate::drivers::ht16k33::Seg14x4;
use crate::drivers::led_bank::LedBank;
use crate::error::{ActuatorError, Error, SensorError};
use crate::sensors::aht20::ClimateSensor;
use crate::sensors::apds9960::Apds9960;
use crate::sensors::seesaw::SeesawEncoder;
use crate::sensors::ClimateReading;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<I2C, D, BTN, G, Y, R, PWM> {
    climate: ClimateSensor<I2C, D>,
    light: Apds9960<I2C>,
    encoder: SeesawEncoder<I2C, D>,
    display: Seg14x4<I2C>,
    main_button: BTN,
    leds: LedBank<G, Y, R>,
    buzzer: Buzzer<PWM>,
}

impl<I2C, D, BTN, G, Y, R, PWM> HardwareAdapter<I2C, D, BTN, G, Y, R, PWM>
where
    I2C: I2c,
    D: DelayNs,
    BTN: InputPin,
    G: OutputPin,
    Y: OutputPin,
    R: OutputPin,
    PWM: SetDutyCycle,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        climate: ClimateSensor<I2C, D>,
        light: Apds9960<I2C>,
        encoder: SeesawEncoder<I2C, D>,
        display: Seg14x4<I2C>,
        main_button: BTN,
        leds: LedBank<G, Y, R>,
        buzzer: Buzzer<PWM>,
    ) -> Self {
        Self {
            climate,
            light,
            encoder,
            display,
            main_button,
            leds,
            buzzer,
        }
    }

    /// Bring up every device.
    ///
    /// Only the display is required: sensors that fail here are retried on
    /// every read and covered by the service's fallbacks meanwhile.  The
    /// AHT20 needs no bring-up here, it calibrates on each read.
    pub fn init(&mut self) -> Result<(), Error> {
        self.display
            .init()
            .map_err(|_| Error::Init("HT16K33 display did not respond"))?;
        self.leds.set_exclusive(LedColour::Off)?;
        self.buzzer.off()?;

        if let Err(e) = self.light.init() {
            warn!("APDS9960 init failed: {e}");
        }
        if let Err(e) = self.encoder.init() {
            warn!("Seesaw encoder init failed: {e}");
        }
        info!("Hardware initialised");
        Ok(())
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<I2C, D, BTN, G, Y, R, PWM> SensorPort for HardwareAdapter<I2C, D, BTN, G, Y, R, PWM>
where
    I2C: I2c,
    D: DelayNs,
{
    fn read_climate(&mut self) -> Result<ClimateReading, SensorError> {
        self.climate.read()
    }

    fn read_ambient_light(&mut self) -> Result<u16, SensorError> {
        self.light.read_green()
    }
}

// ── InputPort implementation ──────────────────────────────────

impl<I2C, D, BTN, G, Y, R, PWM> InputPort for HardwareAdapter<I2C, D, BTN, G, Y, R, PWM>
where
    I2C: I2c,
    D: DelayNs,
    BTN: InputPin,
{
    fn encoder_position(&mut self) -> Result<i32, SensorError> {
        self.encoder.position()
    }

    fn main_button_level(&mut self) -> Result<bool, SensorError> {
        self.main_button
            .is_high()
            .map_err(|_| SensorError::Unavailable)
    }

    fn encoder_button_level(&mut self) -> Result<bool, SensorError> {
        self.encoder.button_level()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<I2C, D, BTN, G, Y, R, PWM> ActuatorPort for HardwareAdapter<I2C, D, BTN, G, Y, R, PWM>
where
    I2C: I2c,
    G: OutputPin,
    Y: OutputPin,
    R: OutputPin,
    PWM: SetDutyCycle,
{
    fn set_led(&mut self, colour: LedColour) -> Result<(), ActuatorError> {
        self.leds.set_exclusive(colour)
    }

    fn set_buzzer(&mut self, duty: u16) -> Result<(), ActuatorError> {
        self.buzzer.set_duty(duty)
    }

    fn set_display_brightness(&mut self, fraction: f32) -> Result<(), ActuatorError> {
        self.display.set_brightness(fraction)
    }

    fn render_display(&mut self, text: &str) -> Result<(), ActuatorError> {
        self.display.show(text)
    }
}
