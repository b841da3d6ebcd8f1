//! Tokio Scheduler - timers on a tokio runtime.
//!
//! **Note**: This module requires the `tokio` feature. If you're using a
//! different async runtime, implement [`Scheduler`] with your runtime's
//! timer facilities instead.

use quiesce_core::{FAR_FUTURE, Scheduler, SchedulerError, Task};
use std::time::{Duration, Instant};
use tokio::{runtime::Handle, task::JoinHandle};

/// A [`Scheduler`] that spawns one sleeping task per timer.
///
/// Cancelling aborts the task. The clock is `tokio::time::Instant`, so
/// paused test time (`start_paused`) is honoured.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Schedule onto the given runtime.
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Schedule onto the runtime the caller is running in.
    pub fn current() -> Result<Self, SchedulerError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| SchedulerError::NoRuntime)
    }
}

impl Scheduler for TokioScheduler {
    type Handle = JoinHandle<()>;

    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }

    fn schedule_after(&self, delay: Duration, task: Task) -> JoinHandle<()> {
        // Deadline is fixed here, not when the spawned task is first polled.
        let deadline = tokio::time::Instant::now() + delay.min(FAR_FUTURE);
        self.handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            task();
        })
    }

    fn cancel(&self, handle: JoinHandle<()>) {
        handle.abort();
    }
}
