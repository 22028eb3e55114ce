//! Drawable surface dimensions.

use serde::{Deserialize, Serialize};

/// Size of the drawable surface in physical pixels.
///
/// Hosts may report a zero-sized surface transiently (a minimized window,
/// a container mid-layout). Sizes built through [`SurfaceSize::new`] clamp
/// both dimensions to at least 1 so listeners and graphics backends never
/// see a degenerate viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceSize {
    /// Width in pixels, at least 1.
    pub width: u32,
    /// Height in pixels, at least 1.
    pub height: u32,
}

impl SurfaceSize {
    /// Create a size, clamping both dimensions to at least 1.
    #[inline]
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width: if width == 0 { 1 } else { width },
            height: if height == 0 { 1 } else { height },
        }
    }
}
