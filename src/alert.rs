//! Alert classification and status-LED selection.
//!
//! Two independent pure functions drive the alert outputs:
//!
//! - [`classify`] maps `(temperature, target, critical)` to an
//!   [`AlertState`].  DANGEROUS takes precedence; WARNING is decided by the
//!   configured [`WarningPolicy`].
//! - [`select_led`] maps `|temperature - target|` alone to exactly one
//!   [`LedColour`].  It does not look at the alert state.
//!
//! [`AlertMonitor`] wraps `classify` for the service: it recomputes the
//! state on every sensor refresh (nothing is latched) and only adds
//! transition logging on top.
//!
//! ```text
//!   t >= critical            ──▶ DANGEROUS
//!   warning_predicate(t, g)  ──▶ WARNING
//!   otherwise                ──▶ SAFE
//! ```

use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::DeskConfig;

/// Temperature classification against target and critical thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AlertState {
    Safe = 0,
    Warning = 1,
    Dangerous = 2,
}

impl AlertState {
    pub fn name(self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Warning => "WARNING",
            Self::Dangerous => "DANGEROUS",
        }
    }
}

/// Which deviations from the target count toward WARNING.
///
/// Defaults to warning on overheating only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningPolicy {
    /// `temp - target > margin` (overheating only).
    AboveTarget,
    /// `|temp - target| > margin`.
    EitherSide,
}

impl WarningPolicy {
    fn exceeded(self, temp_c: f32, target_c: f32, margin_c: f32) -> bool {
        let diff = temp_c - target_c;
        match self {
            Self::AboveTarget => diff > margin_c,
            Self::EitherSide => diff.abs() > margin_c,
        }
    }
}

/// Which of the three status LEDs is lit.  `Off` clears all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedColour {
    Off,
    Green,
    Yellow,
    Red,
}

/// Thresholds consumed by [`classify`], lifted out of [`DeskConfig`].
#[derive(Debug, Clone, Copy)]
pub struct AlertThresholds {
    pub critical_c: f32,
    pub warning_margin_c: f32,
    pub policy: WarningPolicy,
}

impl From<&DeskConfig> for AlertThresholds {
    fn from(c: &DeskConfig) -> Self {
        Self {
            critical_c: c.critical_temp_c,
            warning_margin_c: c.warning_margin_c,
            policy: c.warning_policy,
        }
    }
}

/// Classify a temperature reading.  Pure: the result depends only on the
/// arguments, never on any previous classification.
pub fn classify(temp_c: f32, target_c: f32, th: &AlertThresholds) -> AlertState {
    if temp_c >= th.critical_c {
        AlertState::Dangerous
    } else if th.policy.exceeded(temp_c, target_c, th.warning_margin_c) {
        AlertState::Warning
    } else {
        AlertState::Safe
    }
}

/// Pick the single LED for a reading.  Band edges are inclusive:
/// `diff <= green_within` is green, `diff <= yellow_within` is yellow.
pub fn select_led(temp_c: f32, target_c: f32, green_within_c: f32, yellow_within_c: f32) -> LedColour {
    let diff = (temp_c - target_c).abs();
    if diff <= green_within_c {
        LedColour::Green
    } else if diff <= yellow_within_c {
        LedColour::Yellow
    } else {
        LedColour::Red
    }
}

/// Alert evaluator owned by the service.
pub struct AlertMonitor {
    thresholds: AlertThresholds,
    beep_on_warning: bool,
    /// Most recent classification (for reporting only).
    current: AlertState,
}

impl AlertMonitor {
    pub fn new(config: &DeskConfig) -> Self {
        Self {
            thresholds: AlertThresholds::from(config),
            beep_on_warning: config.beep_on_warning,
            current: AlertState::Safe,
        }
    }

    /// Classify the latest reading and log if the state moved.
    /// Returns `(previous, new)`.
    pub fn evaluate(&mut self, temp_c: f32, target_c: i32) -> (AlertState, AlertState) {
        let prev = self.current;
        let next = classify(temp_c, target_c as f32, &self.thresholds);

        if next != prev {
            match next {
                AlertState::Dangerous => error!(
                    "ALERT {} -> {}: {:.1}\u{00b0}C >= critical {:.1}\u{00b0}C",
                    prev.name(),
                    next.name(),
                    temp_c,
                    self.thresholds.critical_c
                ),
                AlertState::Warning => warn!(
                    "ALERT {} -> {}: {:.1}\u{00b0}C vs target {}\u{00b0}C",
                    prev.name(),
                    next.name(),
                    temp_c,
                    target_c
                ),
                AlertState::Safe => info!("ALERT {} -> {}", prev.name(), next.name()),
            }
        }

        self.current = next;
        (prev, next)
    }

    /// Whether the given state asks for a buzzer pulse.
    pub fn wants_beep(&self, state: AlertState) -> bool {
        match state {
            AlertState::Dangerous => true,
            AlertState::Warning => self.beep_on_warning,
            AlertState::Safe => false,
        }
    }

    /// Most recent classification.
    pub fn state(&self) -> AlertState {
        self.current
    }
}
