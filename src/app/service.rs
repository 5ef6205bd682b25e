//! Application service — the hexagonal core.
//!
//! [`DeskService`] owns every piece of loop state: target setpoint, display
//! mode, stopwatch, alert classification, cached readings and timers.  All
//! I/O flows through port traits injected at call sites, so the whole
//! service runs on host against recording fakes.
//!
//! ```text
//!   InputPort ──▶ ┌─────────────────────────────┐ ──▶ EventSink
//!  SensorPort ──▶ │        DeskService          │
//!   ClockPort ──▶ │ sampler · setpoint · alert  │ ──▶ ActuatorPort
//!                 │ stopwatch · display · timers│
//!                 └─────────────────────────────┘
//! ```
//!
//! ## One tick
//!
//! 1. Sample controls, apply the resulting commands.
//! 2. Poll timers:
//!    - sensor refresh → read climate + light, reclassify, LEDs, buzzer pulse
//!    - mode rotate    → advance display mode (when configured)
//!    - display refresh→ LEDs from cached reading, render active mode
//! 3. Pacing sleep.
//!
//! Between sensor refreshes the cached reading drives both the display and
//! the LEDs.

use log::{debug, info, warn};

use super::commands::Command;
use super::events::AppEvent;
use super::ports::{ActuatorPort, ClockPort, EventSink, InputPort, SensorPort};
use super::sampler::{InputHealth, InputSampler};
use crate::alert::{select_led, AlertMonitor, AlertState, LedColour};
use crate::config::DeskConfig;
use crate::display::{brightness_for, render, DisplayFrame, DisplayMode};
use crate::error::{ActuatorError, Result, SensorError};
use crate::scheduler::{Scheduler, TimerId};
use crate::sensors::{ClimateReading, SensorHealth, SensorKind};
use crate::setpoint::Setpoint;
use crate::stopwatch::Stopwatch;

// ───────────────────────────────────────────────────────────────
// DeskService
// ───────────────────────────────────────────────────────────────

/// The single owner of all loop state.
pub struct DeskService {
    config: DeskConfig,
    sampler: InputSampler,
    setpoint: Setpoint,
    mode: DisplayMode,
    stopwatch: Stopwatch,
    alert: AlertMonitor,
    scheduler: Scheduler,
    health: SensorHealth,
    /// Last good climate reading.  `None` until the first one arrives.
    climate: Option<ClimateReading>,
    ambient: u16,
    brightness: f32,
    led: LedColour,
    tick_count: u64,
    beep_count: u64,
}

impl DeskService {
    /// Construct the service from a validated configuration.
    ///
    /// Does **not** touch hardware; call [`start`](Self::start) next.
    pub fn new(config: DeskConfig) -> Result<Self> {
        config.validate()?;

        let mut scheduler = Scheduler::new();
        scheduler.add(TimerId::SensorRefresh, config.sensor_interval_ms);
        if let Some(every) = config.auto_rotate_ms {
            scheduler.add(TimerId::ModeRotate, every);
        }
        scheduler.add(TimerId::DisplayRefresh, config.display_interval_ms);

        let (min, max) = (config.target_min_c, config.target_max_c);
        let ambient = config.ambient_fallback;
        let brightness = brightness_for(i32::from(ambient), config.ambient_full_scale, config.min_brightness);

        Ok(Self {
            sampler: InputSampler::new(config.stopwatch_reset_hold_ms),
            setpoint: Setpoint::new(config.clamped_initial_target(), min, max),
            mode: DisplayMode::Temperature,
            stopwatch: Stopwatch::new(),
            alert: AlertMonitor::new(&config),
            scheduler,
            health: SensorHealth::default(),
            climate: None,
            ambient,
            brightness,
            led: LedColour::Off,
            tick_count: 0,
            beep_count: 0,
            config,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Seed the encoder baseline, arm the rotation timer and announce start.
    pub fn start(&mut self, inputs: &mut impl InputPort, clock: &impl ClockPort, sink: &mut impl EventSink) {
        self.sampler.seed(inputs);
        self.scheduler.arm(TimerId::ModeRotate, clock.now_ms());
        sink.emit(&AppEvent::Started {
            target_c: self.setpoint.value(),
            mode: self.mode,
        });
        info!(
            "DeskService started: target={}\u{00b0}C range={:?} modes={}",
            self.setpoint.value(),
            self.setpoint.range(),
            self.config.mode_count
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full loop iteration, including the pacing sleep.
    ///
    /// `hw` satisfies all three hardware ports; this avoids a double
    /// mutable borrow while keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + InputPort + ActuatorPort),
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;
        let now = clock.now_ms();

        // 1. Inputs → commands
        let sample = self.sampler.sample(hw, now);
        for change in sample.health {
            match change {
                InputHealth::Failed(sensor, error) => Self::report_fallback(sink, sensor, error),
                InputHealth::Recovered(sensor) => sink.emit(&AppEvent::SensorRecovered { sensor }),
            }
        }
        for cmd in sample.commands {
            self.handle_command(cmd, now, sink);
        }

        // 2. Timers
        for id in self.scheduler.poll(now) {
            match id {
                TimerId::SensorRefresh => self.refresh_sensors(hw, clock, sink),
                TimerId::ModeRotate => self.set_mode(self.mode.next(self.config.mode_count), sink),
                TimerId::DisplayRefresh => self.refresh_display(hw, clock.now_ms()),
            }
        }

        // 3. Pacing
        clock.delay_ms(self.config.poll_delay_ms);
    }

    // ── Command handling ──────────────────────────────────────

    /// Apply one user command.  These are the only writers of the target,
    /// the display mode and the stopwatch.
    pub fn handle_command(&mut self, cmd: Command, now_ms: u64, sink: &mut impl EventSink) {
        match cmd {
            Command::AdjustTarget(delta) => {
                if self.setpoint.apply_delta(delta) {
                    sink.emit(&AppEvent::TargetChanged {
                        target_c: self.setpoint.value(),
                    });
                }
            }
            Command::NextMode => self.set_mode(self.mode.next(self.config.mode_count), sink),
            Command::ToggleStopwatch => {
                if self.stopwatch.toggle(now_ms) {
                    sink.emit(&AppEvent::StopwatchStarted);
                } else {
                    sink.emit(&AppEvent::StopwatchStopped {
                        elapsed_ms: self.stopwatch.elapsed_ms(now_ms),
                    });
                }
            }
            Command::ResetStopwatch => {
                self.stopwatch.reset();
                sink.emit(&AppEvent::StopwatchReset);
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn target(&self) -> i32 {
        self.setpoint.value()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn alert_state(&self) -> AlertState {
        self.alert.state()
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    /// Last good climate reading, if any.
    pub fn climate(&self) -> Option<ClimateReading> {
        self.climate
    }

    /// Ambient value in use (the fallback while the sensor is failing).
    pub fn ambient(&self) -> u16 {
        self.ambient
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// LED most recently commanded.
    pub fn led(&self) -> LedColour {
        self.led
    }

    /// Total ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Buzzer pulses sounded since startup.
    pub fn beep_count(&self) -> u64 {
        self.beep_count
    }

    /// What the display would show right now.
    pub fn frame(&self, now_ms: u64) -> DisplayFrame {
        DisplayFrame {
            temperature_c: self.climate.map(|c| c.temperature_c),
            humidity_pct: self.climate.map(|c| c.humidity_pct),
            stopwatch_secs: self.stopwatch.elapsed_secs(now_ms),
            target_c: self.setpoint.value(),
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn set_mode(&mut self, mode: DisplayMode, sink: &mut impl EventSink) {
        if mode != self.mode {
            self.mode = mode;
            sink.emit(&AppEvent::ModeChanged { mode });
        }
    }

    /// Slow path: fresh readings, classification, LEDs and buzzer.
    fn refresh_sensors(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        match hw.read_climate() {
            Ok(reading) => {
                self.sensor_ok(SensorKind::Climate, sink);
                self.climate = Some(reading);
            }
            // Hold the last good reading.
            Err(e) => self.sensor_failed(SensorKind::Climate, e, sink),
        }

        self.ambient = match hw.read_ambient_light() {
            Ok(level) => {
                self.sensor_ok(SensorKind::AmbientLight, sink);
                level
            }
            Err(e) => {
                self.sensor_failed(SensorKind::AmbientLight, e, sink);
                self.config.ambient_fallback
            }
        };
        self.brightness = brightness_for(
            i32::from(self.ambient),
            self.config.ambient_full_scale,
            self.config.min_brightness,
        );
        log_actuator("display brightness", hw.set_display_brightness(self.brightness));

        let Some(reading) = self.climate else {
            self.update_led(hw);
            return;
        };

        debug!(
            "Sensors: {:.1}\u{00b0}C {:.1}%RH ambient={} brightness={:.2}",
            reading.temperature_c, reading.humidity_pct, self.ambient, self.brightness
        );

        let (prev, next) = self.alert.evaluate(reading.temperature_c, self.setpoint.value());
        if prev != next {
            sink.emit(&AppEvent::AlertChanged {
                from: prev,
                to: next,
                temperature_c: reading.temperature_c,
            });
        }

        self.update_led(hw);

        if self.alert.wants_beep(next) {
            self.pulse_buzzer(hw, clock);
        }
    }

    /// Fast path: LEDs from the cached reading, then the active mode.
    fn refresh_display(&mut self, hw: &mut impl ActuatorPort, now_ms: u64) {
        self.update_led(hw);
        let text = render(self.mode, &self.frame(now_ms));
        log_actuator("display", hw.render_display(&text));
    }

    fn update_led(&mut self, hw: &mut impl ActuatorPort) {
        let colour = self.climate.map_or(LedColour::Off, |c| {
            select_led(
                c.temperature_c,
                self.setpoint.value() as f32,
                self.config.led_green_within_c,
                self.config.led_yellow_within_c,
            )
        });
        self.led = colour;
        log_actuator("status LED", hw.set_led(colour));
    }

    /// Blocking pulse: the whole loop waits for it.
    fn pulse_buzzer(&mut self, hw: &mut impl ActuatorPort, clock: &mut impl ClockPort) {
        self.beep_count += 1;
        log_actuator("buzzer", hw.set_buzzer(self.config.buzzer_duty));
        clock.delay_ms(self.config.buzzer_pulse_ms);
        log_actuator("buzzer", hw.set_buzzer(0));
    }

    fn sensor_failed(&mut self, sensor: SensorKind, error: SensorError, sink: &mut impl EventSink) {
        if self.health.fail(sensor) {
            Self::report_fallback(sink, sensor, error);
        }
    }

    fn sensor_ok(&mut self, sensor: SensorKind, sink: &mut impl EventSink) {
        if self.health.recover(sensor) {
            sink.emit(&AppEvent::SensorRecovered { sensor });
        }
    }

    fn report_fallback(sink: &mut impl EventSink, sensor: SensorKind, error: SensorError) {
        warn!("{} read failed ({}), using fallback", sensor.name(), error);
        sink.emit(&AppEvent::SensorFallback { sensor, error });
    }
}

fn log_actuator(what: &str, result: core::result::Result<(), ActuatorError>) {
    if let Err(e) = result {
        warn!("{what} write failed: {e}");
    }
}
