//! DeskThermo Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single polling loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter            LogEventSink     MonotonicClock    │
//! │  (Sensor+Input+Actuator)    (EventSink)      (ClockPort)       │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              DeskService (pure logic)                  │    │
//! │  │  Sampler · Setpoint · Alert · Stopwatch · Display      │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Board wiring (Adafruit QT Py ESP32-S3)
//!
//! | Signal              | Pad | GPIO |
//! |---------------------|-----|------|
//! | I2C SDA / SCL       | —   | 7 / 6|
//! | Main button (to GND)| A0  | 18   |
//! | Buzzer (LEDC)       | A1  | 17   |
//! | Green LED           | A2  | 9    |
//! | Yellow LED          | A3  | 8    |
//! | Red LED             | TX  | 5    |
#![deny(unused_must_use)]

use std::cell::RefCell;

use anyhow::{Context, Result};
use embedded_hal_bus::i2c::RefCellDevice;
use esp_idf_hal::delay::Delay;
use esp_idf_hal::gpio::{PinDriver, Pull};
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::ledc::config::TimerConfig;
use esp_idf_hal::ledc::{LedcDriver, LedcTimerDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;
use log::info;

use deskthermo::adapters::hardware::HardwareAdapter;
use deskthermo::adapters::log_sink::LogEventSink;
use deskthermo::adapters::time::MonotonicClock;
use deskthermo::app::service::DeskService;
use deskthermo::config::DeskConfig;
use deskthermo::drivers::buzzer::Buzzer;
use deskthermo::drivers::ht16k33::{self, Seg14x4};
use deskthermo::drivers::led_bank::LedBank;
use deskthermo::sensors::aht20::{self, ClimateSensor};
use deskthermo::sensors::apds9960::{self, Apds9960};
use deskthermo::sensors::seesaw::{self, SeesawEncoder};

const I2C_BAUD_HZ: u32 = 400_000;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  DeskThermo v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = DeskConfig::default();
    config.validate().context("compiled-in configuration rejected")?;
    info!("Config: {}", serde_json::to_string(&config)?);

    // ── 3. Peripherals ────────────────────────────────────────
    let p = Peripherals::take()?;

    let i2c = I2cDriver::new(
        p.i2c0,
        p.pins.gpio7,
        p.pins.gpio6,
        &I2cConfig::new().baudrate(Hertz(I2C_BAUD_HZ)),
    )
    .context("I2C bus init")?;
    let bus = RefCell::new(i2c);

    let mut button = PinDriver::input(p.pins.gpio18)?;
    button.set_pull(Pull::Up)?;

    let green = PinDriver::output(p.pins.gpio9)?;
    let yellow = PinDriver::output(p.pins.gpio8)?;
    let red = PinDriver::output(p.pins.gpio5)?;

    let buzzer_timer = LedcTimerDriver::new(
        p.ledc.timer0,
        &TimerConfig::default().frequency(Hertz(config.buzzer_frequency_hz)),
    )?;
    let buzzer_pwm = LedcDriver::new(p.ledc.channel0, &buzzer_timer, p.pins.gpio17)?;

    // ── 4. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(
        ClimateSensor::new(RefCellDevice::new(&bus), Delay::new_default(), aht20::DEFAULT_ADDRESS),
        Apds9960::new(RefCellDevice::new(&bus), apds9960::DEFAULT_ADDRESS),
        SeesawEncoder::new(RefCellDevice::new(&bus), Delay::new_default(), seesaw::DEFAULT_ADDRESS),
        Seg14x4::new(RefCellDevice::new(&bus), ht16k33::DEFAULT_ADDRESS),
        button,
        LedBank::new(green, yellow, red),
        Buzzer::new(buzzer_pwm),
    );
    hw.init()?;

    let mut clock = MonotonicClock::new();
    let mut log_sink = LogEventSink::new();

    // ── 5. Construct app service ──────────────────────────────
    let mut app = DeskService::new(config)?;
    app.start(&mut hw, &clock, &mut log_sink);

    info!("System ready. Entering poll loop.");

    // ── 6. Poll loop ──────────────────────────────────────────
    loop {
        app.tick(&mut hw, &mut clock, &mut log_sink);
    }
}
