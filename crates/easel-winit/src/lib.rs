//! Winit host adapter for Easel canvases.
//!
//! This crate plays the host-toolkit role of the canvas model: it opens a
//! window, turns queued canvas callbacks into winit user events delivered
//! on the event-loop thread, and maps the toolkit lifecycle onto surface
//! attach/detach. A fresh canvas is built through an embedder-supplied
//! factory every time the surface comes up, and the loop ends once the
//! attached canvas has stopped.
//!
//! # Example
//!
//! ```no_run
//! use easel_canvas::Canvas;
//! use easel_winit::{run_host, HostConfig};
//!
//! # struct Graphics;
//! # impl easel_core::GraphicsDevice for Graphics {
//! #     fn setup(&mut self) -> easel_core::Result<()> { Ok(()) }
//! #     fn surface_size(&self) -> (u32, u32) { (1, 1) }
//! #     fn update_time(&mut self) {}
//! #     fn delta_seconds(&self) -> f32 { 0.0 }
//! #     fn present(&mut self) {}
//! #     fn pace(&mut self, _target_fps: u32) {}
//! #     fn teardown(&mut self) {}
//! # }
//! # struct App;
//! # impl easel_canvas::AppListener for App {
//! #     fn create(&mut self, _app: &easel_canvas::AppHandle) {}
//! #     fn render(&mut self, _app: &easel_canvas::AppHandle, _frame: easel_core::FrameInfo) {}
//! # }
//! fn main() -> anyhow::Result<()> {
//!     run_host(HostConfig::new("My App"), |window, queue| {
//!         let _ = window;
//!         Canvas::builder(queue, Graphics, App).build()
//!     })
//! }
//! ```

mod queue;
mod runner;

pub use queue::{HostEvent, WinitQueue};
pub use runner::{run_host, HostConfig};

// Re-export commonly used types for convenience
pub use winit::window::Window;
