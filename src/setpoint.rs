//! Target temperature setpoint.
//!
//! Adjusted only by rotary-encoder deltas; always held inside the
//! configured closed range.  Out-of-range requests are clamped silently.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setpoint {
    value: i32,
    min: i32,
    max: i32,
}

impl Setpoint {
    pub fn new(initial: i32, min: i32, max: i32) -> Self {
        debug_assert!(min <= max, "setpoint range inverted: {min}..={max}");
        Self {
            value: initial.clamp(min, max),
            min,
            max,
        }
    }

    /// Apply an encoder delta.  Returns `true` if the value changed.
    pub fn apply_delta(&mut self, delta: i32) -> bool {
        let next = self.value.saturating_add(delta).clamp(self.min, self.max);
        let changed = next != self.value;
        self.value = next;
        changed
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn range(&self) -> (i32, i32) {
        (self.min, self.max)
    }
}
