//! Relative rotary-encoder tracking.
//!
//! The encoder hardware exposes a free-running signed counter that wraps
//! at the `i32` boundary.  Only the difference between consecutive samples
//! means anything; the absolute value does not.

pub struct EncoderTracker {
    /// Last observed position.  `None` until the first successful read.
    last: Option<i32>,
}

impl Default for EncoderTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl EncoderTracker {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Seed the baseline without producing a delta (boot-time read).
    pub fn seed(&mut self, position: i32) {
        self.last = Some(position);
    }

    /// Delta since the previous sample.  The baseline always moves to
    /// `position`.  The first sample after boot only establishes the
    /// baseline and yields 0.
    pub fn delta(&mut self, position: i32) -> i32 {
        let delta = self.last.map_or(0, |last| position.wrapping_sub(last));
        self.last = Some(position);
        delta
    }
}
