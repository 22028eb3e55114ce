//! Log severity levels.

use serde::{Deserialize, Serialize};

/// Per-canvas log severity threshold.
///
/// Levels are ordered `Off < Error < Info < Debug`; a message passes the
/// threshold when the threshold is at or above the message's own level.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    /// Suppress all shell logging.
    Off = 0,
    /// Errors only.
    Error = 1,
    /// Errors and informational messages.
    #[default]
    Info = 2,
    /// Everything, including debug chatter.
    Debug = 3,
}

impl LogLevel {
    /// Returns `true` if a message at `message` severity passes this threshold.
    #[inline]
    #[must_use]
    pub const fn allows(self, message: Self) -> bool {
        self as u8 >= message as u8
    }

    /// The level's `repr` value, for storage in an atomic.
    #[inline]
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Recover a level from its `repr` value, saturating to `Debug`.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Off,
            1 => Self::Error,
            2 => Self::Info,
            _ => Self::Debug,
        }
    }
}
