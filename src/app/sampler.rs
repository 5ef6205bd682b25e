//! Input sampler — raw control levels in, commands out.
//!
//! Sampled once per tick:
//!
//! | Input          | Conditioning           | Command                         |
//! |----------------|------------------------|---------------------------------|
//! | encoder        | delta since last read  | `AdjustTarget(delta)` if ≠ 0    |
//! | encoder button | falling edge           | `NextMode`                      |
//! | main button    | falling edge           | `ToggleStopwatch`               |
//! | main button    | rising edge, long hold | `ResetStopwatch` (optional)     |
//!
//! A failed read never stops the loop: the encoder reports no movement and
//! keeps its baseline, a button keeps its last good level so a glitch in
//! the middle of a press cannot produce a second edge.  The first failure
//! of each input is reported once; the matching recovery is reported once.

use heapless::Vec;

use super::commands::Command;
use super::ports::InputPort;
use crate::drivers::button::{ButtonEdge, EdgeDetector};
use crate::drivers::encoder::EncoderTracker;
use crate::error::SensorError;
use crate::sensors::{SensorHealth, SensorKind};

/// Commands from one sample.  At most one per input kind.
pub type Commands = Vec<Command, 4>;

/// Health change of one input, for the service to forward as an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputHealth {
    Failed(SensorKind, SensorError),
    Recovered(SensorKind),
}

/// Everything one sample produced.
#[derive(Debug, Default)]
pub struct Sample {
    pub commands: Commands,
    pub health: Vec<InputHealth, 3>,
}

pub struct InputSampler {
    encoder: EncoderTracker,
    main_button: EdgeDetector,
    encoder_button: EdgeDetector,
    reset_hold_ms: Option<u64>,
    health: SensorHealth,
}

impl InputSampler {
    pub fn new(reset_hold_ms: Option<u32>) -> Self {
        Self {
            encoder: EncoderTracker::new(),
            main_button: EdgeDetector::new(),
            encoder_button: EdgeDetector::new(),
            reset_hold_ms: reset_hold_ms.map(u64::from),
            health: SensorHealth::default(),
        }
    }

    /// Establish the encoder baseline before the first tick.
    pub fn seed(&mut self, inputs: &mut impl InputPort) {
        if let Ok(pos) = inputs.encoder_position() {
            self.encoder.seed(pos);
        }
    }

    /// Read every control once and derive this tick's commands.
    pub fn sample(&mut self, inputs: &mut impl InputPort, now_ms: u64) -> Sample {
        let mut out = Sample::default();

        // Encoder: on failure the baseline stays where it was.
        let delta = match inputs.encoder_position() {
            Ok(pos) => {
                self.mark_ok(SensorKind::Encoder, &mut out);
                self.encoder.delta(pos)
            }
            Err(e) => {
                self.mark_failed(SensorKind::Encoder, e, &mut out);
                0
            }
        };
        if delta != 0 {
            let _ = out.commands.push(Command::AdjustTarget(delta));
        }

        let level = self.level(SensorKind::EncoderButton, inputs.encoder_button_level(), &mut out);
        if level.is_some_and(|high| self.encoder_button.just_pressed(high, now_ms)) {
            let _ = out.commands.push(Command::NextMode);
        }

        let level = self.level(SensorKind::MainButton, inputs.main_button_level(), &mut out);
        match level.and_then(|high| self.main_button.update(high, now_ms)) {
            Some(ButtonEdge::Pressed) => {
                let _ = out.commands.push(Command::ToggleStopwatch);
            }
            Some(ButtonEdge::Released { held_ms }) => {
                if self.reset_hold_ms.is_some_and(|hold| held_ms >= hold) {
                    let _ = out.commands.push(Command::ResetStopwatch);
                }
            }
            None => {}
        }

        out
    }

    /// `None` on a failed read: the detector skips that sample.
    fn level(&mut self, kind: SensorKind, read: Result<bool, SensorError>, out: &mut Sample) -> Option<bool> {
        match read {
            Ok(level) => {
                self.mark_ok(kind, out);
                Some(level)
            }
            Err(e) => {
                self.mark_failed(kind, e, out);
                None
            }
        }
    }

    fn mark_failed(&mut self, kind: SensorKind, e: SensorError, out: &mut Sample) {
        if self.health.fail(kind) {
            let _ = out.health.push(InputHealth::Failed(kind, e));
        }
    }

    fn mark_ok(&mut self, kind: SensorKind, out: &mut Sample) {
        if self.health.recover(kind) {
            let _ = out.health.push(InputHealth::Recovered(kind));
        }
    }
}
