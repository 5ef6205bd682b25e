//! Fuzz target: `DeskService::tick`
//!
//! Every 4 input bytes drive one tick: the encoder step, both button
//! levels, a failure mask, and the climate/ambient readings.  Verifies:
//! - No panics under arbitrary input sequences or sensor failures
//! - The target never leaves the configured range
//! - Every rendered frame fits the 4-character display
//! - Brightness stays between the floor and full
//!
//! cargo fuzz run fuzz_poll_loop

#![no_main]

use deskthermo::alert::LedColour;
use deskthermo::app::events::AppEvent;
use deskthermo::app::ports::{ActuatorPort, ClockPort, EventSink, InputPort, SensorPort};
use deskthermo::app::service::DeskService;
use deskthermo::config::DeskConfig;
use deskthermo::error::{ActuatorError, SensorError};
use deskthermo::sensors::ClimateReading;
use libfuzzer_sys::fuzz_target;

// ── Byte-driven hardware ──────────────────────────────────────

#[derive(Default)]
struct FuzzHw {
    encoder: i32,
    main_button: bool,
    encoder_button: bool,
    fail_mask: u8,
    temperature_c: f32,
    ambient: u16,
    last_render_len: usize,
    last_brightness: f32,
}

impl FuzzHw {
    fn fails(&self, bit: u8) -> bool {
        self.fail_mask & (1 << bit) != 0
    }
}

impl SensorPort for FuzzHw {
    fn read_climate(&mut self) -> Result<ClimateReading, SensorError> {
        if self.fails(0) {
            return Err(SensorError::BusFailed);
        }
        Ok(ClimateReading {
            temperature_c: self.temperature_c,
            humidity_pct: 50.0,
        })
    }

    fn read_ambient_light(&mut self) -> Result<u16, SensorError> {
        if self.fails(1) {
            return Err(SensorError::NotReady);
        }
        Ok(self.ambient)
    }
}

impl InputPort for FuzzHw {
    fn encoder_position(&mut self) -> Result<i32, SensorError> {
        if self.fails(2) {
            return Err(SensorError::BusFailed);
        }
        Ok(self.encoder)
    }

    fn main_button_level(&mut self) -> Result<bool, SensorError> {
        if self.fails(3) {
            return Err(SensorError::Unavailable);
        }
        Ok(self.main_button)
    }

    fn encoder_button_level(&mut self) -> Result<bool, SensorError> {
        if self.fails(4) {
            return Err(SensorError::Unavailable);
        }
        Ok(self.encoder_button)
    }
}

impl ActuatorPort for FuzzHw {
    fn set_led(&mut self, _colour: LedColour) -> Result<(), ActuatorError> {
        if self.fails(5) {
            return Err(ActuatorError::GpioWriteFailed);
        }
        Ok(())
    }

    fn set_buzzer(&mut self, _duty: u16) -> Result<(), ActuatorError> {
        Ok(())
    }

    fn set_display_brightness(&mut self, fraction: f32) -> Result<(), ActuatorError> {
        self.last_brightness = fraction;
        Ok(())
    }

    fn render_display(&mut self, text: &str) -> Result<(), ActuatorError> {
        self.last_render_len = text.chars().count();
        if self.fails(6) {
            return Err(ActuatorError::BusWriteFailed);
        }
        Ok(())
    }
}

struct FuzzClock {
    now: u64,
}

impl ClockPort for FuzzClock {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn delay_ms(&mut self, ms: u32) {
        self.now += u64::from(ms);
    }
}

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let config = DeskConfig {
        auto_rotate_ms: Some(1_500),
        stopwatch_reset_hold_ms: Some(2_000),
        ..DeskConfig::default()
    };
    let (min, max) = (config.target_min_c, config.target_max_c);
    let floor = config.min_brightness;

    let Ok(mut app) = DeskService::new(config) else {
        return;
    };
    let mut hw = FuzzHw {
        main_button: true,
        encoder_button: true,
        ..FuzzHw::default()
    };
    let mut clock = FuzzClock { now: 0 };
    let mut sink = NullSink;
    app.start(&mut hw, &clock, &mut sink);

    for chunk in data.chunks_exact(4) {
        hw.encoder = hw.encoder.wrapping_add(i32::from(chunk[0] as i8));
        hw.main_button = chunk[1] & 0x01 == 0;
        hw.encoder_button = chunk[1] & 0x02 == 0;
        hw.fail_mask = chunk[2];
        // -28 °C .. 99.5 °C keeps every temperature on-screen.
        hw.temperature_c = f32::from(chunk[3]) / 2.0 - 28.0;
        hw.ambient = u16::from(chunk[3]) * 3;

        app.tick(&mut hw, &mut clock, &mut sink);

        assert!((min..=max).contains(&app.target()), "target {} left range", app.target());
        assert!(hw.last_render_len <= 4, "render overflowed: {} chars", hw.last_render_len);
        assert!(
            (floor..=1.0 + 1e-6).contains(&app.brightness()),
            "brightness {} out of bounds",
            app.brightness()
        );
    }
});
