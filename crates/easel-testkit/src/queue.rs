//! Deterministic in-process event queue.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use easel_core::{EventQueue, QueueCallback};

/// Pumping stops after this many callbacks; a canvas that keeps
/// re-submitting ticks would otherwise spin `pump_all` forever.
const PUMP_LIMIT: usize = 10_000;

/// Single-threaded stand-in for a host event queue.
///
/// Callbacks accumulate in FIFO order and run only when the test pumps
/// them, so the test controls exactly how far the canvas advances. Note
/// that a running canvas re-submits its tick from inside the tick:
/// `pump_one` therefore usually leaves one callback pending, and
/// `pump_all` only settles once the canvas stops re-submitting.
#[derive(Default)]
pub struct SerialQueue {
    callbacks: Mutex<VecDeque<QueueCallback>>,
    close_requested: AtomicBool,
}

impl SerialQueue {
    /// An empty queue with the close signal unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.callbacks.lock().len()
    }

    /// Run the oldest pending callback, if any. Returns whether one ran.
    pub fn pump_one(&self) -> bool {
        let callback = self.callbacks.lock().pop_front();
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Run callbacks, including newly enqueued ones, until the queue is
    /// idle. Returns how many ran.
    ///
    /// # Panics
    /// Panics after an implausible number of callbacks, which almost
    /// always means the canvas was still re-submitting ticks.
    pub fn pump_all(&self) -> usize {
        let mut ran = 0;
        while self.pump_one() {
            ran += 1;
            assert!(
                ran <= PUMP_LIMIT,
                "queue never went idle; is a canvas still ticking?"
            );
        }
        ran
    }

    /// Make `close_requested` report `true` from now on.
    pub fn request_close(&self) {
        self.close_requested.store(true, Ordering::Relaxed);
    }
}

impl EventQueue for SerialQueue {
    fn invoke_later(&self, callback: QueueCallback) {
        self.callbacks.lock().push_back(callback);
    }

    fn close_requested(&self) -> bool {
        self.close_requested.load(Ordering::Relaxed)
    }
}
