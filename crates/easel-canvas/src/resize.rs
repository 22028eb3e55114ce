//! Surface size change detection.

use easel_core::SurfaceSize;

/// Tracks the last delivered surface size and reports changes.
///
/// Raw host sizes are clamped before comparison, so a transient zero on
/// either axis never reaches the listener, and a host flapping between 0
/// and 1 on an axis does not re-report. Checked once per tick.
#[derive(Debug, Clone, Copy)]
pub struct ResizeTracker {
    last: SurfaceSize,
}

impl ResizeTracker {
    /// Start tracking from `initial`, which counts as already delivered.
    #[must_use]
    pub const fn new(initial: SurfaceSize) -> Self {
        Self { last: initial }
    }

    /// Compare the clamped raw size with the last delivered one.
    ///
    /// Returns the new size exactly when it differs, recording it as
    /// delivered in the same step.
    pub fn observe(&mut self, raw_width: u32, raw_height: u32) -> Option<SurfaceSize> {
        let size = SurfaceSize::new(raw_width, raw_height);
        if size == self.last {
            None
        } else {
            self.last = size;
            Some(size)
        }
    }

    /// The most recently delivered size.
    #[must_use]
    pub const fn last(&self) -> SurfaceSize {
        self.last
    }
}
