//! Polled button edge detector with optional hold timing.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up: the raw level reads `true`
//! (high) when released and `false` (low) when pressed.  The detector is
//! sampled once per poll tick and keeps one sample of memory.
//!
//! ## Edge detection
//!
//! | Previous level | Current level | Event                       |
//! |----------------|---------------|-----------------------------|
//! | high           | low           | `Pressed`                   |
//! | low            | high          | `Released { held_ms }`      |
//! | unchanged      | unchanged     | —                           |
//!
//! At a 10-20 Hz poll rate this one-sample memory is the whole debounce:
//! a press held across many ticks still produces exactly one `Pressed`.

/// Edge events derived from consecutive raw samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    /// Falling edge: the button was just pressed.
    Pressed,
    /// Rising edge: the button was just released after `held_ms`.
    Released { held_ms: u64 },
}

pub struct EdgeDetector {
    /// Previous raw level (`true` = released).
    last_level: bool,
    /// Timestamp of the last falling edge, while pressed.
    pressed_since_ms: Option<u64>,
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeDetector {
    /// A detector that assumes the button starts released.
    pub fn new() -> Self {
        Self {
            last_level: true,
            pressed_since_ms: None,
        }
    }

    /// Feed one raw sample.  Returns an edge event, if any.
    pub fn update(&mut self, level_high: bool, now_ms: u64) -> Option<ButtonEdge> {
        let prev = self.last_level;
        self.last_level = level_high;

        match (prev, level_high) {
            (true, false) => {
                self.pressed_since_ms = Some(now_ms);
                Some(ButtonEdge::Pressed)
            }
            (false, true) => {
                let held_ms = self
                    .pressed_since_ms
                    .take()
                    .map_or(0, |since| now_ms.saturating_sub(since));
                Some(ButtonEdge::Released { held_ms })
            }
            _ => None,
        }
    }

    /// Convenience: `true` exactly on the tick of a falling edge.
    pub fn just_pressed(&mut self, level_high: bool, now_ms: u64) -> bool {
        matches!(self.update(level_high, now_ms), Some(ButtonEdge::Pressed))
    }
}
