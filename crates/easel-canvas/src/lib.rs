//! Canvas-hosted application driver.
//!
//! This crate drives a single application listener from inside a host UI
//! toolkit's cooperative event queue. The canvas never owns a thread or
//! a window: the host hands it an event queue, the canvas schedules one
//! tick at a time on it, and each tick re-submits the next until the
//! canvas is stopped or the host asks the surface to close.
//!
//! The pieces:
//! - [`Canvas`] / [`AppHandle`]: the driver and its thread-safe facade
//! - [`AppListener`]: the callbacks an application implements
//! - [`LifecycleCell`]: the forward-only run-state machine
//! - [`TaskQueue`]: cross-thread work deferred onto the loop thread
//! - [`ResizeTracker`], [`LogGate`], [`PreferencesCache`]: per-canvas
//!   resize coalescing, log gating, and preference memoization

pub mod canvas;
pub mod config;
pub mod gate;
pub mod lifecycle;
pub mod listener;
pub mod prefs;
pub mod resize;
pub mod tasks;

pub use canvas::{AppHandle, Canvas, CanvasBuilder};
pub use config::CanvasConfig;
pub use gate::LogGate;
pub use lifecycle::{LifecycleCell, RunState};
pub use listener::AppListener;
pub use prefs::PreferencesCache;
pub use resize::ResizeTracker;
pub use tasks::{Task, TaskQueue};
