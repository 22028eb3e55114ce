//! Input source contract.

/// Input backend polled by the canvas.
///
/// `update` gathers raw device state early in the tick; `process_events`
/// runs after any resize has been delivered and before the frame renders,
/// dispatching the gathered events to handlers the source itself owns.
pub trait InputSource: Send {
    /// Poll raw device state.
    fn update(&mut self);

    /// Dispatch gathered events to the source's registered handlers.
    fn process_events(&mut self);
}
