//! # Host Scheduler
//!
//! The deferred-execution capability a debounced wrapper is built on.
//!
//! The wrapper never sleeps or spawns on its own. It asks a [`Scheduler`] to
//! run a task no earlier than a given delay, and to forget that task again
//! when the burst is reset or cancelled. Async runtimes, event loops and
//! virtual clocks for tests all fit behind this trait.
//!
//! # Contract
//!
//! - `schedule_after` must not run the task before it returns. The wrapper
//!   holds its state lock while scheduling.
//! - `cancel` is best effort: a task that has already started firing may
//!   still run. The wrapper tolerates this and ignores stale timers.
//! - `now` is the clock the delays are measured against.
//! - Any `Duration` is a valid delay. Delays longer than [`FAR_FUTURE`] may
//!   be clamped to it rather than overflow the clock.

use std::{sync::Arc, time::Duration, time::Instant};

/// Roughly 30 years. A task this far out never fires in practice.
pub const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// A unit of deferred work handed to a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// A host-provided deferred-execution facility.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Scheduler`",
    label = "missing `Scheduler` implementation",
    note = "Schedulers must implement `now`, `schedule_after` and `cancel`."
)]
pub trait Scheduler: Send + Sync + 'static {
    /// Handle identifying one scheduled task.
    type Handle: Send + 'static;

    /// The current time on this scheduler's clock.
    fn now(&self) -> Instant;

    /// Run `task` once `delay` has elapsed.
    fn schedule_after(&self, delay: Duration, task: Task) -> Self::Handle;

    /// Withdraw a previously scheduled task.
    fn cancel(&self, handle: Self::Handle);
}

// Allow sharing one scheduler between several wrappers.
impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    type Handle = S::Handle;

    fn now(&self) -> Instant {
        (**self).now()
    }

    fn schedule_after(&self, delay: Duration, task: Task) -> Self::Handle {
        (**self).schedule_after(delay, task)
    }

    fn cancel(&self, handle: Self::Handle) {
        (**self).cancel(handle)
    }
}
