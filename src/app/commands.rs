//! Inbound commands to the application service.
//!
//! The [`InputSampler`](super::sampler::InputSampler) turns raw control
//! samples into these; the [`DeskService`](super::service::DeskService)
//! is the only thing that acts on them.

/// Actions requested by the user controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the target temperature by this many degrees (clamped).
    AdjustTarget(i32),

    /// Advance to the next display mode.
    NextMode,

    /// Start the stopwatch if stopped, stop it if running.
    ToggleStopwatch,

    /// Stop the stopwatch and clear its elapsed time (long press).
    ResetStopwatch,
}
