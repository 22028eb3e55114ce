//! Easel Demo
//!
//! Minimal embedding of a canvas in a winit window: a clock-only graphics
//! device, a listener that counts launches through the file preference
//! store and reports its frame rate, and a worker thread posting work
//! back onto the loop.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p easel-demo
//! ```
//!
//! Close the window to stop the canvas and end the process.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod app;
mod graphics;

use std::env;

use easel_canvas::{Canvas, CanvasConfig};
use easel_prefs::FileStore;
use easel_winit::{run_host, HostConfig};

use crate::app::DemoApp;
use crate::graphics::WindowGraphics;

const WIDTH: u32 = 960;
const HEIGHT: u32 = 540;
const TARGET_FPS: u32 = 60;

fn main() -> anyhow::Result<()> {
    let prefs_root = env::temp_dir().join("easel-demo");

    run_host(
        HostConfig::new("Easel Demo").with_size(WIDTH, HEIGHT),
        move |window, queue| {
            Canvas::builder(queue, WindowGraphics::new(window), DemoApp::new())
                .preferences(FileStore::new(prefs_root.clone()))
                .config(CanvasConfig::default().with_target_fps(TARGET_FPS))
                .build()
        },
    )
}
