//! Journaling doubles for the collaborator contracts.

use std::sync::Arc;

use parking_lot::Mutex;

use easel_canvas::{AppHandle, AppListener};
use easel_core::{
    AudioDevice, Error, FrameInfo, GraphicsDevice, InputSource, Preferences, PreferencesStore,
    Result, SurfaceSize,
};
use easel_prefs::MemoryStore;

use crate::journal::TraceLog;

/// Shared handle to the size a [`ScriptedGraphics`] reports.
///
/// Keep a clone before handing the device to a canvas, then change the
/// size mid-test to provoke resize detection.
#[derive(Clone, Default)]
pub struct SharedSize {
    size: Arc<Mutex<(u32, u32)>>,
}

impl SharedSize {
    /// Replace the reported raw size. Zero axes are reported as-is.
    pub fn set(&self, width: u32, height: u32) {
        *self.size.lock() = (width, height);
    }

    /// Current raw size.
    #[must_use]
    pub fn get(&self) -> (u32, u32) {
        *self.size.lock()
    }
}

/// Graphics device double with a scriptable surface size.
///
/// Records `graphics.setup`, `graphics.update_time`, `graphics.present`,
/// `graphics.pace`, and `graphics.teardown`; size queries are silent.
pub struct ScriptedGraphics {
    log: TraceLog,
    size: SharedSize,
    fail_setup: bool,
    delta: f32,
}

impl ScriptedGraphics {
    /// A working device reporting 640x480.
    #[must_use]
    pub fn new(log: &TraceLog) -> Self {
        let size = SharedSize::default();
        size.set(640, 480);
        Self {
            log: log.clone(),
            size,
            fail_setup: false,
            delta: 0.016,
        }
    }

    /// A device whose `setup` fails.
    #[must_use]
    pub fn failing(log: &TraceLog) -> Self {
        let mut graphics = Self::new(log);
        graphics.fail_setup = true;
        graphics
    }

    /// Set the initial raw size.
    #[must_use]
    pub fn with_size(self, width: u32, height: u32) -> Self {
        self.size.set(width, height);
        self
    }

    /// Set the fixed delta reported after every clock update.
    #[must_use]
    pub const fn with_delta(mut self, delta: f32) -> Self {
        self.delta = delta;
        self
    }

    /// Handle for changing the reported size after the canvas owns the
    /// device.
    #[must_use]
    pub fn size_handle(&self) -> SharedSize {
        self.size.clone()
    }
}

impl GraphicsDevice for ScriptedGraphics {
    fn setup(&mut self) -> Result<()> {
        self.log.record("graphics.setup");
        if self.fail_setup {
            Err(Error::Graphics("scripted setup failure".to_owned()))
        } else {
            Ok(())
        }
    }

    fn surface_size(&self) -> (u32, u32) {
        self.size.get()
    }

    fn update_time(&mut self) {
        self.log.record("graphics.update_time");
    }

    fn delta_seconds(&self) -> f32 {
        self.delta
    }

    fn present(&mut self) {
        self.log.record("graphics.present");
    }

    fn pace(&mut self, _target_fps: u32) {
        self.log.record("graphics.pace");
    }

    fn teardown(&mut self) {
        self.log.record("graphics.teardown");
    }
}

/// Audio device double recording `audio.update`.
pub struct CountingAudio {
    log: TraceLog,
}

impl CountingAudio {
    #[must_use]
    pub fn new(log: &TraceLog) -> Self {
        Self { log: log.clone() }
    }
}

impl AudioDevice for CountingAudio {
    fn update(&mut self) {
        self.log.record("audio.update");
    }
}

/// Input source double recording `input.update` and
/// `input.process_events`.
pub struct CountingInput {
    log: TraceLog,
}

impl CountingInput {
    #[must_use]
    pub fn new(log: &TraceLog) -> Self {
        Self { log: log.clone() }
    }
}

impl InputSource for CountingInput {
    fn update(&mut self) {
        self.log.record("input.update");
    }

    fn process_events(&mut self) {
        self.log.record("input.process_events");
    }
}

type CreateHook = Box<dyn FnMut(&AppHandle) + Send>;
type RenderHook = Box<dyn FnMut(&AppHandle, FrameInfo) + Send>;

/// Listener double journaling every callback.
///
/// Records `listener.create`, `listener.resize(WxH)`, `listener.render`,
/// `listener.pause`, and `listener.dispose`. Optional hooks run after
/// the journal entry, letting a test act from inside a callback (post a
/// task, request a stop) exactly where a real application could.
pub struct RecordingListener {
    log: TraceLog,
    on_create: Option<CreateHook>,
    on_render: Option<RenderHook>,
}

impl RecordingListener {
    #[must_use]
    pub fn new(log: &TraceLog) -> Self {
        Self {
            log: log.clone(),
            on_create: None,
            on_render: None,
        }
    }

    /// Run `hook` from inside `create`.
    #[must_use]
    pub fn with_create_hook(mut self, hook: impl FnMut(&AppHandle) + Send + 'static) -> Self {
        self.on_create = Some(Box::new(hook));
        self
    }

    /// Run `hook` from inside every `render`.
    #[must_use]
    pub fn with_render_hook(
        mut self,
        hook: impl FnMut(&AppHandle, FrameInfo) + Send + 'static,
    ) -> Self {
        self.on_render = Some(Box::new(hook));
        self
    }
}

impl AppListener for RecordingListener {
    fn create(&mut self, app: &AppHandle) {
        self.log.record("listener.create");
        if let Some(hook) = &mut self.on_create {
            hook(app);
        }
    }

    fn resize(&mut self, _app: &AppHandle, size: SurfaceSize) {
        self.log
            .record(format!("listener.resize({}x{})", size.width, size.height));
    }

    fn render(&mut self, app: &AppHandle, frame: FrameInfo) {
        self.log.record("listener.render");
        if let Some(hook) = &mut self.on_render {
            hook(app, frame);
        }
    }

    fn pause(&mut self, _app: &AppHandle) {
        self.log.record("listener.pause");
    }

    fn dispose(&mut self, _app: &AppHandle) {
        self.log.record("listener.dispose");
    }
}

/// In-memory preference store recording `prefs.open(NAME)`.
pub struct RecordingStore {
    log: TraceLog,
    inner: MemoryStore,
}

impl RecordingStore {
    #[must_use]
    pub fn new(log: &TraceLog) -> Self {
        Self {
            log: log.clone(),
            inner: MemoryStore::new(),
        }
    }
}

impl PreferencesStore for RecordingStore {
    fn open(&self, name: &str) -> Arc<dyn Preferences> {
        self.log.record(format!("prefs.open({name})"));
        self.inner.open(name)
    }
}
