//! Host event queue contract.

/// A callback submitted to the host's event-dispatch queue.
pub type QueueCallback = Box<dyn FnOnce() + Send + 'static>;

/// The host toolkit's cooperative event queue.
///
/// This is the only scheduling primitive the canvas uses: it never spawns
/// threads and never sleeps on its own. `invoke_later` must be callable
/// from any thread and must run callbacks on the host's single
/// event-dispatch thread, in submission order.
pub trait EventQueue: Send + Sync {
    /// Enqueue `callback` to run on the event-dispatch thread.
    fn invoke_later(&self, callback: QueueCallback);

    /// Whether the host has asked the surface to close.
    ///
    /// Polled at the end of each tick; `true` ends resubmission. Hosts
    /// without such a signal keep the default.
    fn close_requested(&self) -> bool {
        false
    }
}
