//! Presentation: display modes, fixed-width rendering, brightness mapping.
//!
//! | Mode        | Example  | Format                                      |
//! |-------------|----------|---------------------------------------------|
//! | Temperature | `T 23`   | tag `T`, integer °C right-justified width 3 |
//! | Humidity    | `H 41`   | tag `H`, integer %RH right-justified width 3|
//! | Stopwatch   | ` 205`   | minutes width 2, seconds zero-padded width 2|
//! | Target      | `S 80`   | tag `S`, target right-justified width 3     |
//!
//! Values are truncated toward zero before formatting, so `-5.7` shows as
//! `T -5`.  The stopwatch holds at `9959` past 99 minutes 59 seconds.

use core::fmt::Write;

use heapless::String;

/// Rendered display text.  Wide enough for any `i32` or `u64`-derived field,
/// so formatting into it cannot run out of capacity.
pub type DisplayText = String<24>;

/// What the display currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DisplayMode {
    Temperature = 0,
    Humidity = 1,
    Stopwatch = 2,
    Target = 3,
}

impl DisplayMode {
    /// Total number of modes the firmware knows about.
    pub const COUNT: u8 = 4;

    /// Convert an index back to a mode.  Panics on out-of-range in debug
    /// builds; returns `Temperature` in release.
    pub fn from_index(idx: u8) -> Self {
        match idx {
            0 => Self::Temperature,
            1 => Self::Humidity,
            2 => Self::Stopwatch,
            3 => Self::Target,
            _ => {
                debug_assert!(false, "invalid display mode index: {idx}");
                Self::Temperature
            }
        }
    }

    /// The following mode, wrapping modulo `mode_count`.
    pub fn next(self, mode_count: u8) -> Self {
        debug_assert!((1..=Self::COUNT).contains(&mode_count));
        let count = mode_count.clamp(1, Self::COUNT);
        Self::from_index((self as u8 + 1) % count)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Stopwatch => "stopwatch",
            Self::Target => "target",
        }
    }
}

/// Inputs the renderer needs.  `None` climate fields mean no reading has
/// succeeded yet.
#[derive(Debug, Clone, Copy)]
pub struct DisplayFrame {
    pub temperature_c: Option<f32>,
    pub humidity_pct: Option<f32>,
    pub stopwatch_secs: u64,
    pub target_c: i32,
}

/// Render the text for one mode.
pub fn render(mode: DisplayMode, frame: &DisplayFrame) -> DisplayText {
    match mode {
        DisplayMode::Temperature => tagged('T', frame.temperature_c.map(|t| t as i32)),
        DisplayMode::Humidity => tagged('H', frame.humidity_pct.map(|h| h as i32)),
        DisplayMode::Stopwatch => format_stopwatch(frame.stopwatch_secs),
        DisplayMode::Target => tagged('S', Some(frame.target_c)),
    }
}

/// `{tag}{value:>3}`, or `{tag}---` when there is no value yet.
fn tagged(tag: char, value: Option<i32>) -> DisplayText {
    let mut out = DisplayText::new();
    let _ = match value {
        Some(v) => write!(out, "{tag}{v:>3}"),
        None => write!(out, "{tag}---"),
    };
    out
}

/// Longest time the four digits can show: 99:59.
pub const STOPWATCH_MAX_SECS: u64 = 99 * 60 + 59;

/// Minutes right-justified in two columns followed by two-digit seconds.
/// Holds at `9959` once the stopwatch passes 99:59.
pub fn format_stopwatch(total_secs: u64) -> DisplayText {
    let total_secs = total_secs.min(STOPWATCH_MAX_SECS);
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    let mut out = DisplayText::new();
    let _ = write!(out, "{mins:>2}{secs:02}");
    out
}

/// Map an ambient-light reading onto a display brightness fraction.
///
/// `brightness = floor + (1 - floor) * clamp(ambient, 0, full_scale) / full_scale`
pub fn brightness_for(ambient: i32, full_scale: u16, floor: f32) -> f32 {
    let full = f32::from(full_scale.max(1));
    let clamped = (ambient as f32).clamp(0.0, full);
    floor + (clamped / full) * (1.0 - floor)
}
