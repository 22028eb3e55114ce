//! Deterministic host queue and journaling doubles for Easel tests.
//!
//! A canvas under test gets a [`SerialQueue`] instead of a real toolkit
//! queue, so the test decides exactly how far the canvas advances, and
//! doubles that record every call into one shared [`TraceLog`], so
//! ordering across collaborators can be asserted from a single flat list.

pub mod doubles;
pub mod journal;
pub mod queue;

pub use doubles::{
    CountingAudio, CountingInput, RecordingListener, RecordingStore, ScriptedGraphics, SharedSize,
};
pub use journal::TraceLog;
pub use queue::SerialQueue;
