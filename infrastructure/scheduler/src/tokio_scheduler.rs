use std::time::Duration;

use business::domain::scheduler::{ScheduledTask, Scheduler, Task};
use tokio::runtime::{Handle, TryCurrentError};
use tokio::task::JoinHandle;

/// [`Scheduler`] backed by tokio timers.
///
/// Each scheduled task is a spawned future that sleeps and then runs the
/// callback; cancelling aborts that future.
#[derive(Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Binds to the runtime the caller is running on.
    pub fn from_current() -> Result<Self, TryCurrentError> {
        Handle::try_current().map(Self::new)
    }
}

struct TokioScheduledTask {
    join_handle: JoinHandle<()>,
}

impl ScheduledTask for TokioScheduledTask {
    fn cancel(&self) {
        self.join_handle.abort();
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Box<dyn ScheduledTask> {
        let join_handle = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            // No await point after the sleep: an abort either wins before the
            // callback starts or arrives after it finished.
            task();
        });
        Box::new(TokioScheduledTask { join_handle })
    }
}
