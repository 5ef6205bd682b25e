//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (the ESP-IDF logger on target, so UART / USB-CDC).
//! Each event is one line with a fixed prefix, easy to grep on a serial
//! console.

use log::{error, info, warn};

use crate::alert::AlertState;
use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { target_c, mode } => {
                info!("START | target={}\u{00b0}C mode={}", target_c, mode.name());
            }
            AppEvent::AlertChanged {
                from,
                to,
                temperature_c,
            } => match to {
                AlertState::Dangerous => error!(
                    "ALERT | {} -> {} | T={:.1}\u{00b0}C",
                    from.name(),
                    to.name(),
                    temperature_c
                ),
                _ => info!(
                    "ALERT | {} -> {} | T={:.1}\u{00b0}C",
                    from.name(),
                    to.name(),
                    temperature_c
                ),
            },
            AppEvent::TargetChanged { target_c } => {
                info!("TARGET | {}\u{00b0}C", target_c);
            }
            AppEvent::ModeChanged { mode } => {
                info!("MODE | {}", mode.name());
            }
            AppEvent::StopwatchStarted => {
                info!("WATCH | started");
            }
            AppEvent::StopwatchStopped { elapsed_ms } => {
                info!("WATCH | stopped at {}.{:03}s", elapsed_ms / 1000, elapsed_ms % 1000);
            }
            AppEvent::StopwatchReset => {
                info!("WATCH | reset");
            }
            AppEvent::SensorFallback { sensor, error } => {
                warn!("SENSOR | {} failed: {} (fallback active)", sensor.name(), error);
            }
            AppEvent::SensorRecovered { sensor } => {
                info!("SENSOR | {} recovered", sensor.name());
            }
        }
    }
}
