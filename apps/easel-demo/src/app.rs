//! Demo application listener.

use std::thread;

use easel_canvas::{AppHandle, AppListener};
use easel_core::{FrameInfo, SurfaceSize};

const TAG: &str = "demo";

/// Listener exercising the application-facing canvas surface: gated
/// logging, file-backed preferences, and cross-thread task posting.
#[derive(Default)]
pub struct DemoApp {
    elapsed: f32,
    frames: f32,
    total_seconds: f32,
}

impl DemoApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AppListener for DemoApp {
    fn create(&mut self, app: &AppHandle) {
        let prefs = app.preferences("easel-demo");
        let launches = prefs
            .get("launches")
            .and_then(|raw| raw.parse::<u32>().ok())
            .unwrap_or(0)
            + 1;
        prefs.put("launches", &launches.to_string());
        if let Err(err) = prefs.flush() {
            app.error_with(TAG, &err, || {
                "could not persist the launch counter".to_owned()
            });
        }
        app.log(TAG, || format!("launch #{launches}"));

        // Worker threads talk to the canvas through a cloned handle.
        let worker = app.clone();
        thread::spawn(move || {
            let task = worker.clone();
            worker.post(move || {
                task.log(TAG, || "hello from a worker-posted task".to_owned());
            });
        });
    }

    fn resize(&mut self, app: &AppHandle, size: SurfaceSize) {
        app.log(TAG, || {
            format!("surface is now {}x{}", size.width, size.height)
        });
    }

    fn render(&mut self, app: &AppHandle, frame: FrameInfo) {
        self.elapsed += frame.delta_seconds;
        self.total_seconds += frame.delta_seconds;
        self.frames += 1.0;
        if self.elapsed >= 1.0 {
            let fps = self.frames / self.elapsed;
            app.log(TAG, || format!("{fps:.0} fps"));
            self.elapsed = 0.0;
            self.frames = 0.0;
        }
    }

    fn pause(&mut self, app: &AppHandle) {
        let seconds = self.total_seconds;
        let prefs = app.preferences("easel-demo");
        prefs.put("last_session_seconds", &format!("{seconds:.1}"));
        if let Err(err) = prefs.flush() {
            app.error_with(TAG, &err, || "could not persist session stats".to_owned());
        }
        app.log(TAG, || format!("ran for {seconds:.1}s"));
    }

    fn dispose(&mut self, app: &AppHandle) {
        app.debug(TAG, || "demo state released".to_owned());
    }
}
