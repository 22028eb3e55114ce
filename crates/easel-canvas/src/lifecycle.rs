//! Canvas lifecycle states.

use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle of a canvas.
///
/// The state only moves forward:
/// ```text
/// Created ─start─> Running ─stop─> Stopping ─final action─> Stopped
///     │                                                        ^
///     └──────────stop before start, failed setup───────────────┘
/// ```
/// `Stopping` covers the window between a stop being accepted (graphics
/// torn down or about to be) and the listener's final `pause`/`dispose`
/// pair running. Once `Stopped`, no tick and no deferred task executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RunState {
    /// Built; the surface has not been attached, or the deferred start
    /// has not run yet.
    Created = 0,
    /// Startup completed; ticks are being scheduled.
    Running = 1,
    /// A stop was accepted; the final callbacks are still pending.
    Stopping = 2,
    /// Final callbacks delivered. Nothing runs after this.
    Stopped = 3,
}

impl RunState {
    /// Returns `true` while ticks are being scheduled.
    #[inline]
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Returns `true` once the final callbacks have been delivered.
    #[inline]
    #[must_use]
    pub const fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }

    const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Created,
            1 => Self::Running,
            2 => Self::Stopping,
            _ => Self::Stopped,
        }
    }
}

/// Atomic cell holding a [`RunState`].
///
/// Transitions are compare-and-swap, so racing callers cannot move the
/// state backwards and exactly one caller wins any given transition.
#[derive(Debug)]
pub struct LifecycleCell {
    state: AtomicU8,
}

impl LifecycleCell {
    /// A cell starting in [`RunState::Created`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(RunState::Created as u8),
        }
    }

    /// Current state.
    #[must_use]
    pub fn get(&self) -> RunState {
        RunState::from_raw(self.state.load(Ordering::Acquire))
    }

    /// Attempt the transition `from -> to`.
    ///
    /// Returns `true` if this caller performed it, `false` if the state
    /// was anything other than `from`.
    pub fn transition(&self, from: RunState, to: RunState) -> bool {
        self.state
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl Default for LifecycleCell {
    fn default() -> Self {
        Self::new()
    }
}
