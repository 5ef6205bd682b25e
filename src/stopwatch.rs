//! Start/stop stopwatch driven by the main button.
//!
//! Elapsed time is `accumulated` while stopped and
//! `accumulated + (now - started_at)` while running.  Timestamps come from
//! the monotonic [`ClockPort`](crate::app::ports::ClockPort), so the
//! subtraction never goes negative.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stopwatch {
    running: bool,
    started_at_ms: u64,
    accumulated_ms: u64,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start if stopped, stop if running.  Returns `true` if now running.
    pub fn toggle(&mut self, now_ms: u64) -> bool {
        if self.running {
            self.accumulated_ms += now_ms.saturating_sub(self.started_at_ms);
            self.running = false;
        } else {
            self.started_at_ms = now_ms;
            self.running = true;
        }
        self.running
    }

    /// Clear the accumulated time and stop.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        if self.running {
            self.accumulated_ms + now_ms.saturating_sub(self.started_at_ms)
        } else {
            self.accumulated_ms
        }
    }

    /// Whole seconds elapsed (truncated), as the display shows them.
    pub fn elapsed_secs(&self, now_ms: u64) -> u64 {
        self.elapsed_ms(now_ms) / 1000
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
