//! Host queue backed by winit user events.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tracing::debug;
use winit::event_loop::EventLoopProxy;

use easel_core::{EventQueue, QueueCallback};

/// Event pumped through the winit user-event channel.
pub enum HostEvent {
    /// Run a queued canvas callback on the loop thread.
    Invoke(QueueCallback),
}

/// [`EventQueue`] over a winit event-loop proxy.
///
/// Every callback becomes a [`HostEvent::Invoke`] user event, which winit
/// delivers on the event-loop thread in submission order. The close flag
/// is raised by the host runner when the window's close button is
/// pressed; ticks stop re-submitting once they see it.
pub struct WinitQueue {
    // EventLoopProxy is Send but not Sync; the mutex makes the queue
    // shareable between the loop thread and workers.
    proxy: Mutex<EventLoopProxy<HostEvent>>,
    close: AtomicBool,
}

impl WinitQueue {
    #[must_use]
    pub fn new(proxy: EventLoopProxy<HostEvent>) -> Self {
        Self {
            proxy: Mutex::new(proxy),
            close: AtomicBool::new(false),
        }
    }

    /// Raise the close signal.
    pub fn request_close(&self) {
        self.close.store(true, Ordering::Relaxed);
    }
}

impl EventQueue for WinitQueue {
    fn invoke_later(&self, callback: QueueCallback) {
        if self
            .proxy
            .lock()
            .send_event(HostEvent::Invoke(callback))
            .is_err()
        {
            debug!("dropping a callback sent after the event loop closed");
        }
    }

    fn close_requested(&self) -> bool {
        self.close.load(Ordering::Relaxed)
    }
}
