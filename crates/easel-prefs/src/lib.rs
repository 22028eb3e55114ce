//! Reference preference stores for the Easel canvas shell.
//!
//! Two implementations of the `easel-core` preference contracts:
//! - [`MemoryStore`]: process-lifetime maps, the default store of a canvas
//! - [`FileStore`]: one TOML file per store name under a root directory

pub mod file;
pub mod memory;

pub use file::{FilePreferences, FileStore};
pub use memory::{MemoryPreferences, MemoryStore};
