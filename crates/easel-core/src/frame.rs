//! Per-tick frame information.

/// Timing information handed to the listener for one render tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInfo {
    /// Seconds elapsed between the two most recent frame-clock updates.
    pub delta_seconds: f32,
    /// Ticks completed since the listener was created.
    pub frame: u64,
}
