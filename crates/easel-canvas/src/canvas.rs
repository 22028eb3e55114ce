//! The canvas driver and its application-facing handle.
//!
//! A [`Canvas`] runs one [`AppListener`] inside a host toolkit's event
//! queue. Attaching the drawable surface schedules a deferred start;
//! every tick then re-submits the next one through the queue, so the
//! host's dispatch thread stays the only thread that ever touches the
//! graphics device, the input source, the audio device, or the listener.
//!
//! One tick, in order: advance the frame clock, drain deferred tasks,
//! poll input, deliver at most one coalesced resize, dispatch input
//! events, render, pump audio, present, optionally pace, and re-submit
//! unless the canvas stopped or the host requested a close.

use std::sync::Arc;
use std::thread::{self, ThreadId};

use parking_lot::Mutex;

use easel_core::{
    AudioDevice, EventQueue, FrameInfo, GraphicsDevice, InputSource, LogLevel, Preferences,
    PreferencesStore, SurfaceSize,
};
use easel_prefs::MemoryStore;

use crate::config::CanvasConfig;
use crate::gate::LogGate;
use crate::lifecycle::{LifecycleCell, RunState};
use crate::listener::AppListener;
use crate::prefs::PreferencesCache;
use crate::resize::ResizeTracker;
use crate::tasks::{Task, TaskQueue};

const TAG: &str = "canvas";

/// Everything only the loop thread touches.
///
/// Held in a mutex on the shared core; the lock is taken by start, by
/// each tick, and by the final shutdown action. `stop` never takes it
/// from a foreign thread.
struct Guts {
    graphics: Box<dyn GraphicsDevice>,
    audio: Box<dyn AudioDevice>,
    input: Box<dyn InputSource>,
    listener: Box<dyn AppListener>,
    resize: ResizeTracker,
    frame: u64,
}

/// State shared between the canvas, its handles, and the queued ticks.
struct CanvasCore {
    state: LifecycleCell,
    tasks: TaskQueue,
    gate: LogGate,
    prefs: Mutex<PreferencesCache>,
    queue: Arc<dyn EventQueue>,
    config: CanvasConfig,
    loop_thread: Mutex<Option<ThreadId>>,
    guts: Mutex<Guts>,
}

impl CanvasCore {
    fn handle(core: &Arc<Self>) -> AppHandle {
        AppHandle {
            core: Arc::clone(core),
        }
    }

    fn on_loop_thread(&self) -> bool {
        self.loop_thread
            .lock()
            .is_some_and(|id| id == thread::current().id())
    }

    /// Deferred startup, run as a queued callback on the loop thread.
    fn start(core: &Arc<Self>) {
        *core.loop_thread.lock() = Some(thread::current().id());

        if core.state.get() != RunState::Created {
            core.gate
                .debug(TAG, || "ignoring start on a canvas that already ran".to_owned());
            return;
        }

        let handle = Self::handle(core);
        let mut guts = core.guts.lock();

        if let Err(err) = guts.graphics.setup() {
            core.state.transition(RunState::Created, RunState::Stopped);
            core.gate.error_with(TAG, &err, || {
                "graphics setup failed, canvas never started".to_owned()
            });
            return;
        }

        let (raw_width, raw_height) = guts.graphics.surface_size();
        let initial = SurfaceSize::new(raw_width, raw_height);
        guts.resize = ResizeTracker::new(initial);

        if !core.state.transition(RunState::Created, RunState::Running) {
            // Stopped while setting up; nothing gated ever ran.
            guts.graphics.teardown();
            return;
        }

        guts.listener.create(&handle);
        guts.listener.resize(&handle, initial);
        core.gate.info(TAG, || {
            format!("started at {}x{}", initial.width, initial.height)
        });

        // `create` may have stopped the canvas; honor that before the
        // first tick instead of scheduling one.
        if core.state.get() == RunState::Running {
            Self::schedule_tick(core);
        } else {
            Self::finish_stop(core, &mut guts);
        }
    }

    fn schedule_tick(core: &Arc<Self>) {
        let tick_core = Arc::clone(core);
        core.queue
            .invoke_later(Box::new(move || Self::tick(&tick_core)));
    }

    fn tick(core: &Arc<Self>) {
        // A tick queued before a stop resolves is stale.
        if core.state.get() != RunState::Running {
            return;
        }

        let handle = Self::handle(core);
        let mut guts = core.guts.lock();

        guts.graphics.update_time();

        // Tasks posted while this batch runs land in the next tick. A
        // task stopping the canvas is honored right here: teardown runs
        // and the rest of the tick is skipped.
        for task in core.tasks.take() {
            task();
        }
        if core.state.get() != RunState::Running {
            Self::finish_stop(core, &mut guts);
            return;
        }

        guts.input.update();

        let (raw_width, raw_height) = guts.graphics.surface_size();
        if let Some(size) = guts.resize.observe(raw_width, raw_height) {
            core.gate
                .debug(TAG, || format!("resized to {}x{}", size.width, size.height));
            guts.listener.resize(&handle, size);
        }

        guts.input.process_events();

        let frame = FrameInfo {
            delta_seconds: guts.graphics.delta_seconds(),
            frame: guts.frame,
        };
        guts.listener.render(&handle, frame);
        guts.frame += 1;

        guts.audio.update();
        guts.graphics.present();
        if core.config.vsync {
            guts.graphics.pace(core.config.target_fps);
        }

        // A render or audio callback may have stopped the canvas; the
        // frame it produced was still presented above, but teardown
        // happens before anything else runs.
        if core.state.get() != RunState::Running {
            Self::finish_stop(core, &mut guts);
            return;
        }
        if !core.queue.close_requested() {
            Self::schedule_tick(core);
        }
    }

    /// Accept a stop request from any thread.
    ///
    /// Off the loop thread (including before start ever ran) the request
    /// is marshalled through the host queue so teardown still happens on
    /// the dispatch thread, ordered after everything already queued.
    fn request_stop(core: &Arc<Self>) {
        if core.on_loop_thread() {
            Self::stop_local(core);
        } else {
            let stop_core = Arc::clone(core);
            core.queue
                .invoke_later(Box::new(move || Self::stop_local(&stop_core)));
        }
    }

    /// Stop on the loop thread. Idempotent.
    ///
    /// When called between ticks this tears the graphics down right
    /// here; when called from inside a tick (a drained task or listener
    /// callback) only the state moves, and the running tick performs the
    /// teardown at its next checkpoint.
    fn stop_local(core: &Arc<Self>) {
        if core.state.transition(RunState::Created, RunState::Stopped) {
            core.gate
                .debug(TAG, || "stopped before start, nothing to tear down".to_owned());
            return;
        }
        if !core.state.transition(RunState::Running, RunState::Stopping) {
            return;
        }
        core.gate.debug(TAG, || "stopping".to_owned());
        if let Some(mut guts) = core.guts.try_lock() {
            Self::finish_stop(core, &mut guts);
        }
    }

    /// Tear the graphics down and queue the final shutdown action.
    ///
    /// Reached exactly once per canvas: either from `stop_local` between
    /// ticks, or from the single tick (or startup) that observes the
    /// `Stopping` state while holding the guts lock.
    fn finish_stop(core: &Arc<Self>, guts: &mut Guts) {
        guts.graphics.teardown();
        let final_core = Arc::clone(core);
        core.queue.invoke_later(Box::new(move || {
            let handle = Self::handle(&final_core);
            let mut guts = final_core.guts.lock();
            // Tasks posted before the stop still run, ahead of pause.
            for task in final_core.tasks.take() {
                task();
            }
            guts.listener.pause(&handle);
            guts.listener.dispose(&handle);
            drop(guts);
            final_core
                .state
                .transition(RunState::Stopping, RunState::Stopped);
            final_core.gate.debug(TAG, || "stopped".to_owned());
        }));
    }

    fn post(&self, task: Task) {
        match self.state.get() {
            RunState::Created | RunState::Running => self.tasks.post(task),
            RunState::Stopping | RunState::Stopped => {
                self.gate
                    .debug(TAG, || "dropping task posted after stop".to_owned());
            }
        }
    }
}

/// A canvas-hosted application driver.
///
/// Built once per surface attachment via [`Canvas::builder`]. The
/// embedder wires `surface_attached`/`surface_detached` to its toolkit's
/// attach and detach notifications; everything else runs through the
/// host queue. Dropping a `Canvas` does not stop the application; the
/// queued ticks keep the shared core alive until a stop resolves.
pub struct Canvas {
    core: Arc<CanvasCore>,
}

impl Canvas {
    /// Start building a canvas around the host `queue`, the embedder's
    /// `graphics` device, and the application `listener`.
    #[must_use]
    pub fn builder(
        queue: Arc<dyn EventQueue>,
        graphics: impl GraphicsDevice + 'static,
        listener: impl AppListener + 'static,
    ) -> CanvasBuilder {
        CanvasBuilder {
            queue,
            graphics: Box::new(graphics),
            listener: Box::new(listener),
            audio: None,
            input: None,
            store: None,
            config: CanvasConfig::default(),
        }
    }

    /// A thread-safe handle for the application side.
    #[must_use]
    pub fn handle(&self) -> AppHandle {
        CanvasCore::handle(&self.core)
    }

    /// The drawable surface became usable; schedule the deferred start.
    ///
    /// Startup itself (graphics setup, `create`, the first `resize`)
    /// runs as a queued callback on the dispatch thread, never inside
    /// the attach notification.
    pub fn surface_attached(&self) {
        let start_core = Arc::clone(&self.core);
        self.core
            .queue
            .invoke_later(Box::new(move || CanvasCore::start(&start_core)));
    }

    /// The drawable surface is going away; stop now.
    ///
    /// On the dispatch thread this tears the graphics down before
    /// returning, so the context never outlives the surface it was
    /// created against.
    pub fn surface_detached(&self) {
        CanvasCore::request_stop(&self.core);
    }

    /// Post a task to run on the loop thread during the next tick.
    pub fn post(&self, task: impl FnOnce() + Send + 'static) {
        self.core.post(Box::new(task));
    }

    /// Request a stop. Idempotent; safe from any thread.
    pub fn stop(&self) {
        CanvasCore::request_stop(&self.core);
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.core.state.get()
    }
}

/// Thread-safe application-facing view of a canvas.
///
/// Every listener callback receives one; clones can be moved to worker
/// threads. All methods are safe from any thread, including the loop
/// thread mid-callback.
#[derive(Clone)]
pub struct AppHandle {
    core: Arc<CanvasCore>,
}

impl AppHandle {
    /// Post a task to run on the loop thread during the next tick.
    ///
    /// Tasks posted after a stop began are dropped.
    pub fn post(&self, task: impl FnOnce() + Send + 'static) {
        self.core.post(Box::new(task));
    }

    /// Request a stop. Idempotent; safe from any thread.
    pub fn stop(&self) {
        CanvasCore::request_stop(&self.core);
    }

    /// Ask the application to shut down.
    ///
    /// Equivalent to [`AppHandle::stop`]: the listener is paused and
    /// disposed, and the host keeps running. What happens to the process
    /// afterwards is the embedder's decision.
    pub fn exit(&self) {
        CanvasCore::request_stop(&self.core);
    }

    /// The preference store named `name`, opened on first use and shared
    /// across all lookups of the same name on this canvas.
    #[must_use]
    pub fn preferences(&self, name: &str) -> Arc<dyn Preferences> {
        self.core.prefs.lock().handle(name)
    }

    /// Current log threshold.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.core.gate.level()
    }

    /// Adjust the log threshold at runtime.
    pub fn set_log_level(&self, level: LogLevel) {
        self.core.gate.set_level(level);
    }

    /// Log at info severity. The message closure only runs if the
    /// current threshold allows it.
    pub fn log(&self, tag: &str, message: impl FnOnce() -> String) {
        self.core.gate.info(tag, message);
    }

    /// Log at debug severity.
    pub fn debug(&self, tag: &str, message: impl FnOnce() -> String) {
        self.core.gate.debug(tag, message);
    }

    /// Log at error severity.
    pub fn error(&self, tag: &str, message: impl FnOnce() -> String) {
        self.core.gate.error(tag, message);
    }

    /// Log at error severity with the triggering error attached.
    pub fn error_with(
        &self,
        tag: &str,
        error: &dyn std::error::Error,
        message: impl FnOnce() -> String,
    ) {
        self.core.gate.error_with(tag, error, message);
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.core.state.get()
    }
}

/// Builder for [`Canvas`].
///
/// Audio, input, and the preference store are optional; leaving them out
/// wires in silent no-op devices and an in-memory store.
pub struct CanvasBuilder {
    queue: Arc<dyn EventQueue>,
    graphics: Box<dyn GraphicsDevice>,
    listener: Box<dyn AppListener>,
    audio: Option<Box<dyn AudioDevice>>,
    input: Option<Box<dyn InputSource>>,
    store: Option<Box<dyn PreferencesStore>>,
    config: CanvasConfig,
}

impl CanvasBuilder {
    /// Use this audio device instead of the silent default.
    #[must_use]
    pub fn audio(mut self, audio: impl AudioDevice + 'static) -> Self {
        self.audio = Some(Box::new(audio));
        self
    }

    /// Use this input source instead of the inert default.
    #[must_use]
    pub fn input(mut self, input: impl InputSource + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    /// Use this preference store instead of the in-memory default.
    #[must_use]
    pub fn preferences(mut self, store: impl PreferencesStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Replace the default configuration.
    #[must_use]
    pub fn config(mut self, config: CanvasConfig) -> Self {
        self.config = config;
        self
    }

    /// Assemble the canvas. Nothing runs until the surface is attached.
    #[must_use]
    pub fn build(self) -> Canvas {
        let store = self.store.unwrap_or_else(|| Box::new(MemoryStore::new()));
        let core = Arc::new(CanvasCore {
            state: LifecycleCell::new(),
            tasks: TaskQueue::new(),
            gate: LogGate::new(self.config.log_level),
            prefs: Mutex::new(PreferencesCache::new(store)),
            queue: self.queue,
            config: self.config,
            loop_thread: Mutex::new(None),
            guts: Mutex::new(Guts {
                graphics: self.graphics,
                audio: self.audio.unwrap_or_else(|| Box::new(SilentAudio)),
                input: self.input.unwrap_or_else(|| Box::new(IdleInput)),
                listener: self.listener,
                resize: ResizeTracker::new(SurfaceSize::new(1, 1)),
                frame: 0,
            }),
        });
        Canvas { core }
    }
}

/// Default audio device: nothing to pump.
struct SilentAudio;

impl AudioDevice for SilentAudio {
    fn update(&mut self) {}
}

/// Default input source: no devices, no events.
struct IdleInput;

impl InputSource for IdleInput {
    fn update(&mut self) {}
    fn process_events(&mut self) {}
}
