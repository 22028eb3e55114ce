//! Canvas configuration.

use easel_core::LogLevel;
use serde::{Deserialize, Serialize};

/// Tunables for a canvas.
///
/// Deserializes from a flat table with every field optional, so an
/// embedder can keep a partial `[canvas]` section in its own config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Pace frames after present. When `false`, ticks run back to back
    /// as fast as the host queue schedules them.
    pub vsync: bool,
    /// Target frame rate used when `vsync` is set.
    pub target_fps: u32,
    /// Initial severity threshold for the canvas's log gate.
    pub log_level: LogLevel,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            vsync: true,
            target_fps: 60,
            log_level: LogLevel::Info,
        }
    }
}

impl CanvasConfig {
    /// Enable or disable frame pacing.
    #[must_use]
    pub const fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Set the paced frame rate.
    #[must_use]
    pub const fn with_target_fps(mut self, target_fps: u32) -> Self {
        self.target_fps = target_fps;
        self
    }

    /// Set the initial log threshold.
    #[must_use]
    pub const fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }
}
