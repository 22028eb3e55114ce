//! Deferred task queue.

use parking_lot::Mutex;

/// A unit of work posted from any thread, run once on the loop thread.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// FIFO mailbox for deferred tasks.
///
/// `post` appends under a lock held just long enough for the push;
/// `take` swaps the whole batch out under the same lock. Tasks therefore
/// execute with no lock held, and anything posted while a batch runs
/// lands in the next batch instead of extending the current one.
#[derive(Default)]
pub struct TaskQueue {
    tasks: Mutex<Vec<Task>>,
}

impl TaskQueue {
    /// An empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task. Callable from any thread.
    pub fn post(&self, task: Task) {
        self.tasks.lock().push(task);
    }

    /// Remove and return every task posted so far, oldest first.
    #[must_use]
    pub fn take(&self) -> Vec<Task> {
        std::mem::take(&mut *self.tasks.lock())
    }

    /// Number of tasks waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Returns `true` if no tasks are waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
