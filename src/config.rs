//! System configuration parameters
//!
//! All tunable parameters for the desk monitor, including the behavioural
//! switches for warning symmetry, buzzer-on-warning, the number of display
//! modes and timed rotation.
//! Values are compiled in; there is no persistent store.

use serde::{Deserialize, Serialize};

use crate::alert::WarningPolicy;
use crate::error::{Error, Result};

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeskConfig {
    // --- Target temperature ---
    /// Target at boot (°C), clamped into `target_min_c..=target_max_c`
    pub initial_target_c: i32,
    /// Lowest selectable target (°C)
    pub target_min_c: i32,
    /// Highest selectable target (°C)
    pub target_max_c: i32,

    // --- Alerting ---
    /// Temperature at or above which the state is DANGEROUS (°C)
    pub critical_temp_c: f32,
    /// Deviation from target beyond which the state is WARNING (°C, strict)
    pub warning_margin_c: f32,
    /// Which side(s) of the target count toward WARNING
    pub warning_policy: WarningPolicy,
    /// Pulse the buzzer on WARNING as well as DANGEROUS
    pub beep_on_warning: bool,

    // --- Status LEDs ---
    /// Green while |temp - target| is at most this (°C)
    pub led_green_within_c: f32,
    /// Yellow while |temp - target| is at most this (°C); red beyond
    pub led_yellow_within_c: f32,

    // --- Display ---
    /// Number of display modes cycled through (2-4)
    pub mode_count: u8,
    /// Advance the display mode on a fixed period as well (milliseconds)
    pub auto_rotate_ms: Option<u32>,
    /// Ambient reading substituted when the light sensor fails
    pub ambient_fallback: u16,
    /// Ambient reading that maps to full brightness
    pub ambient_full_scale: u16,
    /// Brightness floor (0.0-1.0)
    pub min_brightness: f32,

    // --- Stopwatch ---
    /// Hold the main button at least this long to clear the stopwatch (milliseconds)
    pub stopwatch_reset_hold_ms: Option<u32>,

    // --- Buzzer ---
    /// Pulse duty on a 16-bit scale (0-65535)
    pub buzzer_duty: u16,
    /// PWM carrier frequency for the passive buzzer (Hz)
    pub buzzer_frequency_hz: u32,
    /// Blocking pulse length (milliseconds)
    pub buzzer_pulse_ms: u32,

    // --- Timing ---
    /// Sensor refresh interval (milliseconds)
    pub sensor_interval_ms: u32,
    /// Display and LED refresh interval (milliseconds)
    pub display_interval_ms: u32,
    /// Pacing sleep at the end of every tick (milliseconds)
    pub poll_delay_ms: u32,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            // Target
            initial_target_c: 80,
            target_min_c: 0,
            target_max_c: 100,

            // Alerting
            critical_temp_c: 95.0,
            warning_margin_c: 10.0,
            warning_policy: WarningPolicy::AboveTarget,
            beep_on_warning: true,

            // LEDs
            led_green_within_c: 3.0,
            led_yellow_within_c: 10.0,

            // Display
            mode_count: 4,
            auto_rotate_ms: None,
            ambient_fallback: 100,
            ambient_full_scale: 300,
            min_brightness: 0.1,

            // Stopwatch
            stopwatch_reset_hold_ms: None,

            // Buzzer
            buzzer_duty: 3000,
            buzzer_frequency_hz: 400,
            buzzer_pulse_ms: 100,

            // Timing
            sensor_interval_ms: 5000, // 0.2 Hz
            display_interval_ms: 500, // 2 Hz
            poll_delay_ms: 50,        // ~20 Hz polling
        }
    }
}

impl DeskConfig {
    /// Reject parameter combinations the poll loop cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.target_min_c > self.target_max_c {
            return Err(Error::Config("target_min_c above target_max_c"));
        }
        if !(2..=4).contains(&self.mode_count) {
            return Err(Error::Config("mode_count must be 2..=4"));
        }
        if self.led_green_within_c < 0.0 || self.led_green_within_c > self.led_yellow_within_c {
            return Err(Error::Config("LED bands must satisfy 0 <= green <= yellow"));
        }
        if self.warning_margin_c < 0.0 {
            return Err(Error::Config("warning_margin_c is negative"));
        }
        if self.sensor_interval_ms == 0 || self.display_interval_ms == 0 {
            return Err(Error::Config("refresh intervals must be non-zero"));
        }
        if self.auto_rotate_ms == Some(0) {
            return Err(Error::Config("auto_rotate_ms must be non-zero when set"));
        }
        if !(self.min_brightness > 0.0 && self.min_brightness <= 1.0) {
            return Err(Error::Config("min_brightness must be in (0, 1]"));
        }
        if self.ambient_full_scale == 0 {
            return Err(Error::Config("ambient_full_scale is zero"));
        }
        if self.buzzer_pulse_ms == 0 || self.buzzer_frequency_hz == 0 {
            return Err(Error::Config("buzzer pulse and frequency must be non-zero"));
        }
        Ok(())
    }

    /// Boot target, forced into the configured range.
    pub fn clamped_initial_target(&self) -> i32 {
        self.initial_target_c
            .clamp(self.target_min_c, self.target_max_c)
    }
}
