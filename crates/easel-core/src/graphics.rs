//! Graphics device contract.

use crate::Result;

/// Host-side graphics context driven by the canvas.
///
/// Every method is called on the host's event-dispatch thread, in a fixed
/// order within a tick: `update_time` first, `present` after the listener
/// rendered, `pace` last when frame pacing is enabled. The device is set up
/// once before the listener exists and torn down exactly once, before the
/// listener's final callbacks run.
pub trait GraphicsDevice: Send {
    /// Create the underlying context for the attached surface.
    ///
    /// A failure here is fatal to startup: the listener is never created
    /// and the canvas goes straight to its stopped state.
    fn setup(&mut self) -> Result<()>;

    /// Current drawable size in physical pixels.
    ///
    /// May legitimately report zero on either axis while the host is
    /// mid-layout; callers clamp.
    fn surface_size(&self) -> (u32, u32);

    /// Advance the device's frame clock. Called first in every tick.
    fn update_time(&mut self);

    /// Seconds elapsed between the two most recent `update_time` calls.
    fn delta_seconds(&self) -> f32;

    /// Flip or submit the completed frame.
    fn present(&mut self);

    /// Throttle to at most `target_fps` frames per second.
    ///
    /// Only called when the canvas has frame pacing enabled.
    fn pace(&mut self, target_fps: u32);

    /// Destroy the context.
    fn teardown(&mut self);
}
