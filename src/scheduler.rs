//! Interval timer engine.
//!
//! Every cadence in the poll loop (slow sensor refresh, display refresh,
//! optional timed mode rotation) is a slot in one [`Scheduler`].  Slots are
//! compared against a monotonic millisecond clock on each tick; nothing
//! fires from an interrupt or callback.
//!
//! ```text
//!   now_ms ──▶ Scheduler::poll ──▶ [SensorRefresh, DisplayRefresh, ...]
//!                  │
//!                  ├─ never fired?        → fire now
//!                  └─ now - last >= every → fire, last = now
//! ```
//!
//! Re-arming at the firing time (not `last + every`) lets a late tick
//! push the next deadline out rather than firing twice to catch up.

use heapless::Vec;
use log::info;

/// Identity of a timer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerId {
    /// Re-read climate and light sensors, reclassify, pulse buzzer.
    SensorRefresh,
    /// Re-render the active display mode and the status LEDs.
    DisplayRefresh,
    /// Advance the display mode without user input.
    ModeRotate,
}

/// Maximum number of concurrent timers (stack-allocated).
const MAX_TIMERS: usize = 4;

/// Timers that fired on one poll, in slot order.
pub type Fired = Vec<TimerId, MAX_TIMERS>;

#[derive(Debug, Clone, Copy)]
struct TimerEntry {
    id: TimerId,
    interval_ms: u64,
    last_fired_ms: Option<u64>,
}

/// The scheduler engine.
pub struct Scheduler {
    timers: [Option<TimerEntry>; MAX_TIMERS],
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            timers: [None; MAX_TIMERS],
        }
    }

    /// Add a periodic timer.  Returns the slot index, or `None` if full.
    pub fn add(&mut self, id: TimerId, interval_ms: u32) -> Option<usize> {
        for (i, slot) in self.timers.iter_mut().enumerate() {
            if slot.is_none() {
                info!("Scheduler: {:?} every {}ms at slot {}", id, interval_ms, i);
                *slot = Some(TimerEntry {
                    id,
                    interval_ms: u64::from(interval_ms),
                    last_fired_ms: None,
                });
                return Some(i);
            }
        }
        None
    }

    /// Treat a timer as having just fired at `now_ms`, so its first firing
    /// is one full interval away instead of on the next poll.
    pub fn arm(&mut self, id: TimerId, now_ms: u64) {
        for entry in self.timers.iter_mut().flatten() {
            if entry.id == id {
                entry.last_fired_ms = Some(now_ms);
            }
        }
    }

    /// Poll every timer against `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Fired {
        let mut fired = Fired::new();

        for entry in self.timers.iter_mut().flatten() {
            let due = match entry.last_fired_ms {
                None => true,
                Some(last) => now_ms.saturating_sub(last) >= entry.interval_ms,
            };
            if due {
                entry.last_fired_ms = Some(now_ms);
                // Capacity equals the slot count, so this cannot overflow.
                let _ = fired.push(entry.id);
            }
        }

        fired
    }
}
