//! Mock hardware, clock and event sink for integration tests.
//!
//! `MockHardware` serves whatever sensor and control values the test sets
//! and records every actuator call, so tests can assert on the full
//! command history without touching real GPIO/PWM/I2C.  `FakeClock`
//! advances only when the service sleeps.

use deskthermo::alert::LedColour;
use deskthermo::app::events::AppEvent;
use deskthermo::app::ports::{ActuatorPort, ClockPort, EventSink, InputPort, SensorPort};
use deskthermo::error::{ActuatorError, SensorError};
use deskthermo::sensors::ClimateReading;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ActuatorCall {
    SetLed(LedColour),
    SetBuzzer(u16),
    SetBrightness(f32),
    Render(String),
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub climate: Result<ClimateReading, SensorError>,
    pub ambient: Result<u16, SensorError>,
    pub encoder: Result<i32, SensorError>,
    /// Raw levels: `true` = released.
    pub main_button: Result<bool, SensorError>,
    pub encoder_button: Result<bool, SensorError>,
    /// Make every actuator write fail (the call is still recorded).
    pub fail_actuators: bool,
    pub climate_reads: u32,
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            climate: Ok(reading(22.0, 45.0)),
            ambient: Ok(150),
            encoder: Ok(0),
            main_button: Ok(true),
            encoder_button: Ok(true),
            fail_actuators: false,
            climate_reads: 0,
            calls: Vec::new(),
        }
    }

    pub fn set_temperature(&mut self, temperature_c: f32) {
        self.climate = Ok(reading(temperature_c, 45.0));
    }

    pub fn renders(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ActuatorCall::Render(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_render(&self) -> Option<&str> {
        self.renders().last().copied()
    }

    pub fn leds(&self) -> Vec<LedColour> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ActuatorCall::SetLed(l) => Some(*l),
                _ => None,
            })
            .collect()
    }

    pub fn last_led(&self) -> Option<LedColour> {
        self.leds().last().copied()
    }

    pub fn buzzer_duties(&self) -> Vec<u16> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ActuatorCall::SetBuzzer(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    pub fn last_brightness(&self) -> Option<f32> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetBrightness(b) => Some(*b),
            _ => None,
        })
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn record(&mut self, call: ActuatorCall, err: ActuatorError) -> Result<(), ActuatorError> {
        self.calls.push(call);
        if self.fail_actuators { Err(err) } else { Ok(()) }
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

pub fn reading(temperature_c: f32, humidity_pct: f32) -> ClimateReading {
    ClimateReading {
        temperature_c,
        humidity_pct,
    }
}

impl SensorPort for MockHardware {
    fn read_climate(&mut self) -> Result<ClimateReading, SensorError> {
        self.climate_reads += 1;
        self.climate
    }

    fn read_ambient_light(&mut self) -> Result<u16, SensorError> {
        self.ambient
    }
}

impl InputPort for MockHardware {
    fn encoder_position(&mut self) -> Result<i32, SensorError> {
        self.encoder
    }

    fn main_button_level(&mut self) -> Result<bool, SensorError> {
        self.main_button
    }

    fn encoder_button_level(&mut self) -> Result<bool, SensorError> {
        self.encoder_button
    }
}

impl ActuatorPort for MockHardware {
    fn set_led(&mut self, colour: LedColour) -> Result<(), ActuatorError> {
        self.record(ActuatorCall::SetLed(colour), ActuatorError::GpioWriteFailed)
    }

    fn set_buzzer(&mut self, duty: u16) -> Result<(), ActuatorError> {
        self.record(ActuatorCall::SetBuzzer(duty), ActuatorError::PwmWriteFailed)
    }

    fn set_display_brightness(&mut self, fraction: f32) -> Result<(), ActuatorError> {
        self.record(ActuatorCall::SetBrightness(fraction), ActuatorError::BusWriteFailed)
    }

    fn render_display(&mut self, text: &str) -> Result<(), ActuatorError> {
        self.record(ActuatorCall::Render(text.to_string()), ActuatorError::BusWriteFailed)
    }
}

// ── FakeClock ─────────────────────────────────────────────────

/// Clock that only moves when slept on.
#[derive(Default)]
pub struct FakeClock {
    pub now: u64,
    pub delays: Vec<u32>,
}

impl ClockPort for FakeClock {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn delay_ms(&mut self, ms: u32) {
        self.now += u64::from(ms);
        self.delays.push(ms);
    }
}

// ── RecordingSink ────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
