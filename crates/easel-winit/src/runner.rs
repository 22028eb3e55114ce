//! Host window and event loop.

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use easel_canvas::Canvas;

use crate::queue::{HostEvent, WinitQueue};

/// Host window configuration.
#[derive(Clone)]
pub struct HostConfig {
    /// Window title.
    pub title: String,
    /// Initial window width.
    pub width: u32,
    /// Initial window height.
    pub height: u32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            title: "Easel".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

impl HostConfig {
    /// Create a new config with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window dimensions.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Open a host window and drive canvases built by `factory` in it.
///
/// This function initializes logging, creates the event loop, and builds
/// a fresh canvas through `factory` every time the surface comes up. It
/// returns once the attached canvas has stopped, whether the stop came
/// from the window's close button or from the application itself.
pub fn run_host<F>(config: HostConfig, factory: F) -> anyhow::Result<()>
where
    F: FnMut(Arc<Window>, Arc<WinitQueue>) -> Canvas + 'static,
{
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("{} starting...", config.title);

    let event_loop = EventLoop::<HostEvent>::with_user_event().build()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let queue = Arc::new(WinitQueue::new(event_loop.create_proxy()));

    let mut runner = HostRunner {
        config,
        factory,
        queue,
        state: None,
    };

    if let Err(e) = event_loop.run_app(&mut runner) {
        error!("Event loop error: {e}");
    }

    Ok(())
}

/// Internal host runner that implements winit's ApplicationHandler.
struct HostRunner<F> {
    config: HostConfig,
    factory: F,
    queue: Arc<WinitQueue>,
    state: Option<HostState>,
}

/// Live window with a canvas attached to it.
struct HostState {
    // Keeps the native window alive for as long as the canvas runs.
    _window: Arc<Window>,
    canvas: Canvas,
}

impl<F> ApplicationHandler<HostEvent> for HostRunner<F>
where
    F: FnMut(Arc<Window>, Arc<WinitQueue>) -> Canvas + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        match self.attach(event_loop) {
            Ok(state) => self.state = Some(state),
            Err(e) => {
                error!("Failed to open the host window: {e}");
                event_loop.exit();
            }
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // The surface is going away; the canvas stops, and the next
        // resume builds a fresh one.
        if let Some(state) = self.state.take() {
            state.canvas.surface_detached();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::CloseRequested = event {
            info!("Close requested");
            self.queue.request_close();
            match &self.state {
                Some(state) => state.canvas.surface_detached(),
                None => event_loop.exit(),
            }
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: HostEvent) {
        let HostEvent::Invoke(callback) = event;
        callback();
        self.maybe_finish(event_loop);
    }
}

impl<F> HostRunner<F>
where
    F: FnMut(Arc<Window>, Arc<WinitQueue>) -> Canvas + 'static,
{
    fn attach(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<HostState> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let canvas = (self.factory)(Arc::clone(&window), Arc::clone(&self.queue));
        canvas.surface_attached();
        info!("Surface attached");

        Ok(HostState {
            _window: window,
            canvas,
        })
    }

    /// End the loop once the attached canvas has fully stopped.
    fn maybe_finish(&mut self, event_loop: &ActiveEventLoop) {
        let stopped = self
            .state
            .as_ref()
            .is_some_and(|state| state.canvas.run_state().is_stopped());
        if stopped {
            self.state = None;
            event_loop.exit();
        }
    }
}
