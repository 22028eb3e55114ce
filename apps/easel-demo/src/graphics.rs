//! Clock-only graphics device over a winit window.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};
use winit::window::Window;

use easel_core::{GraphicsDevice, Result};

/// Graphics device that tracks time against a winit window.
///
/// The demo draws nothing, so `present` has no work to do; the device
/// still reports the real surface size and paces frames the way a
/// swapchain-backed one would.
pub struct WindowGraphics {
    window: Arc<Window>,
    tick_start: Instant,
    delta: f32,
}

impl WindowGraphics {
    #[must_use]
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            tick_start: Instant::now(),
            delta: 0.0,
        }
    }
}

impl GraphicsDevice for WindowGraphics {
    fn setup(&mut self) -> Result<()> {
        let size = self.window.inner_size();
        info!("Window surface ready at {}x{}", size.width, size.height);
        Ok(())
    }

    fn surface_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn update_time(&mut self) {
        let now = Instant::now();
        self.delta = now.duration_since(self.tick_start).as_secs_f32();
        self.tick_start = now;
    }

    fn delta_seconds(&self) -> f32 {
        self.delta
    }

    fn present(&mut self) {
        // Nothing to swap.
    }

    fn pace(&mut self, target_fps: u32) {
        if target_fps == 0 {
            return;
        }
        let target = Duration::from_nanos(1_000_000_000 / u64::from(target_fps));
        let elapsed = self.tick_start.elapsed();
        if elapsed < target {
            thread::sleep(target - elapsed);
        }
    }

    fn teardown(&mut self) {
        debug!("Window surface released");
    }
}
