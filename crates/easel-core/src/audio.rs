//! Audio device contract.

/// Audio engine hook pumped once per tick, after the listener rendered.
pub trait AudioDevice: Send {
    /// Advance mixing and streaming state.
    fn update(&mut self);
}
