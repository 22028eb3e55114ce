//! Per-canvas log gate.

use std::sync::atomic::{AtomicU8, Ordering};

use easel_core::LogLevel;

/// Runtime-adjustable severity gate in front of `tracing`.
///
/// Each canvas owns its own gate, so two canvases in one process can log
/// at different thresholds. Message closures are only invoked when the
/// level passes, keeping suppressed calls free of formatting cost.
pub struct LogGate {
    level: AtomicU8,
}

impl LogGate {
    /// A gate with the given initial threshold.
    #[must_use]
    pub fn new(level: LogLevel) -> Self {
        Self {
            level: AtomicU8::new(level.as_raw()),
        }
    }

    /// Current threshold.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_raw(self.level.load(Ordering::Relaxed))
    }

    /// Replace the threshold. Takes effect for subsequent calls.
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level.as_raw(), Ordering::Relaxed);
    }

    /// Log at error severity.
    pub fn error(&self, tag: &str, message: impl FnOnce() -> String) {
        if self.level().allows(LogLevel::Error) {
            tracing::error!(tag = tag, "{}", message());
        }
    }

    /// Log at error severity with the triggering error attached.
    pub fn error_with(
        &self,
        tag: &str,
        error: &dyn std::error::Error,
        message: impl FnOnce() -> String,
    ) {
        if self.level().allows(LogLevel::Error) {
            tracing::error!(tag = tag, error = %error, "{}", message());
        }
    }

    /// Log at info severity.
    pub fn info(&self, tag: &str, message: impl FnOnce() -> String) {
        if self.level().allows(LogLevel::Info) {
            tracing::info!(tag = tag, "{}", message());
        }
    }

    /// Log at debug severity.
    pub fn debug(&self, tag: &str, message: impl FnOnce() -> String) {
        if self.level().allows(LogLevel::Debug) {
            tracing::debug!(tag = tag, "{}", message());
        }
    }
}
