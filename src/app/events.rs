//! Outbound application events.
//!
//! The [`DeskService`](super::service::DeskService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them (serial log today).

use crate::alert::AlertState;
use crate::display::DisplayMode;
use crate::error::SensorError;
use crate::sensors::SensorKind;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started.
    Started {
        target_c: i32,
        mode: DisplayMode,
    },

    /// The alert classification moved.
    AlertChanged {
        from: AlertState,
        to: AlertState,
        temperature_c: f32,
    },

    /// The target temperature changed (after clamping).
    TargetChanged { target_c: i32 },

    /// The display mode advanced.
    ModeChanged { mode: DisplayMode },

    StopwatchStarted,

    StopwatchStopped { elapsed_ms: u64 },

    StopwatchReset,

    /// A sensor read failed and its fallback was applied.  Emitted once
    /// when the sensor starts failing, not on every failed read.
    SensorFallback {
        sensor: SensorKind,
        error: SensorError,
    },

    /// A previously failing sensor read succeeded again.
    SensorRecovered { sensor: SensorKind },
}
