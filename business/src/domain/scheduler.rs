use std::time::Duration;

/// Deferred work handed to a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Handle to a task scheduled with a [`Scheduler`].
pub trait ScheduledTask: Send + Sync {
    /// Prevents the task from running if it has not started yet.
    /// Cancelling twice, or after the task ran, is a no-op.
    fn cancel(&self);
}

/// Port for fire-once delayed callbacks.
///
/// Implementations must never run the task on the calling thread from inside
/// `schedule`: callers may hold locks that the task needs.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Task) -> Box<dyn ScheduledTask>;
}
