//! `AppListener` trait definition.

use easel_core::{FrameInfo, SurfaceSize};

use crate::canvas::AppHandle;

/// Trait for applications hosted on a canvas.
///
/// The canvas drives every callback on the host's event-dispatch thread,
/// in a fixed order: `create` once, then a first `resize`, then `render`
/// once per tick with `resize` before it whenever the surface changed,
/// and finally `pause` and `dispose` exactly once each as the canvas
/// shuts down. Callbacks receive the canvas's [`AppHandle`] for posting
/// work, reading preferences, logging, and requesting a stop.
pub trait AppListener: Send {
    /// Set up application state.
    ///
    /// Called once, after the graphics device is ready and before any
    /// other callback.
    fn create(&mut self, app: &AppHandle);

    /// React to a surface size change.
    ///
    /// Sizes are clamped; neither dimension is ever zero. Always called
    /// once before the first `render`, then only on actual changes.
    ///
    /// Default implementation does nothing.
    #[allow(unused_variables)]
    fn resize(&mut self, app: &AppHandle, size: SurfaceSize) {}

    /// Produce a frame.
    fn render(&mut self, app: &AppHandle, frame: FrameInfo);

    /// The canvas is shutting down; last chance to persist transient
    /// state. Called exactly once, right before `dispose`.
    ///
    /// Default implementation does nothing.
    #[allow(unused_variables)]
    fn pause(&mut self, app: &AppHandle) {}

    /// Release application resources. Nothing is called after this.
    ///
    /// Default implementation does nothing.
    #[allow(unused_variables)]
    fn dispose(&mut self, app: &AppHandle) {}
}
