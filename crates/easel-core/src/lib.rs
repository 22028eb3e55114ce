//! Contracts and shared types for the Easel canvas shell.
//!
//! This crate defines the boundary between the canvas driver and the host
//! application that embeds it:
//! - Collaborator traits the embedder supplies (`GraphicsDevice`,
//!   `AudioDevice`, `InputSource`, `EventQueue`, `PreferencesStore`)
//! - Shared value types (`SurfaceSize`, `FrameInfo`, `LogLevel`)
//! - Common error types

pub mod audio;
pub mod error;
pub mod frame;
pub mod graphics;
pub mod input;
pub mod log;
pub mod prefs;
pub mod queue;
pub mod surface;

pub use audio::AudioDevice;
pub use error::{Error, Result};
pub use frame::FrameInfo;
pub use graphics::GraphicsDevice;
pub use input::InputSource;
pub use log::LogLevel;
pub use prefs::{Preferences, PreferencesStore};
pub use queue::{EventQueue, QueueCallback};
pub use surface::SurfaceSize;
