//! # Debounced Wrapper
//!
//! Wraps a [`Target`] so that a burst of calls collapses into at most one
//! execution, or two when the leading edge is enabled.
//!
//! Every call records its context and arguments as "the latest call" and
//! resets a single timer. When the timer fires without being reset again,
//! the target runs with whatever call was recorded last.
//!
//! # State Machine
//!
//! ```text
//! Idle --call--> BurstOpen --timer fires / cancel--> Idle
//! ```
//!
//! With [`DebounceOptions::leading`], the call that opens a burst executes
//! the target immediately on the caller's thread. The timer it schedules is
//! then a no-op unless a later call in the same burst replaces it: one
//! leading execution per uninterrupted burst.
//!
//! # Errors
//!
//! - A failing leading execution is returned from the call that triggered it
//!   as [`TargetError::Leading`]. It does not open a burst.
//! - A failing trailing execution has no caller to return to. It is stored as
//!   the wrapper's [`last_error`](Debounced::last_error) and reported to the
//!   wrapper's [`ErrorSink`] (by default [`LoggingSink`]).

mod state;

use crate::sinks::LoggingSink;
use parking_lot::{Mutex, ReentrantMutex};
use quiesce_core::{
    ConfigError, DebounceOptions, ErrorSink, Payload, Scheduler, Target, TargetError, Task,
    wait_from_millis,
};
use state::{BurstState, Call, PendingTimer};
use std::{
    sync::{Arc, Weak},
    time::{Duration, Instant},
};

#[cfg(feature = "tokio")]
use crate::schedulers::TokioScheduler;
#[cfg(feature = "tokio")]
use quiesce_core::SchedulerError;

struct Shared<T, Ctx, Args, S>
where
    T: Target<Ctx, Args>,
    Ctx: Payload,
    Args: Payload,
    S: Scheduler,
{
    target: T,
    wait: Duration,
    options: DebounceOptions,
    scheduler: S,
    sink: Box<dyn ErrorSink>,
    state: Mutex<BurstState<Ctx, Args, T::Output, S::Handle>>,
    // Held while the target runs and its outcome is recorded. Reentrant so
    // the target may call its own wrapper.
    running: ReentrantMutex<()>,
}

/// A debounced handle to a [`Target`].
///
/// Cloning the handle is cheap; all clones share one burst state. Once every
/// clone is dropped, a trailing execution that is still pending never runs.
///
/// # Example
///
/// ```rust,ignore
/// use quiesce_std::{debounce::Debounced, schedulers::ManualScheduler};
/// use quiesce_core::{DebounceOptions, target_fn};
/// use std::{sync::Arc, time::Duration};
///
/// let scheduler = Arc::new(ManualScheduler::new());
/// let search = Debounced::new(
///     target_fn(|query: &String| run_search(query)),
///     Duration::from_millis(300),
///     DebounceOptions::default(),
///     scheduler.clone(),
/// );
///
/// search.call("H".into())?;
/// search.call("HE".into())?;
/// scheduler.advance(Duration::from_millis(300)); // runs once, with "HE"
/// ```
pub struct Debounced<T, Ctx, Args, S>
where
    T: Target<Ctx, Args>,
    Ctx: Payload,
    Args: Payload,
    S: Scheduler,
{
    shared: Arc<Shared<T, Ctx, Args, S>>,
}

impl<T, Ctx, Args, S> Clone for Debounced<T, Ctx, Args, S>
where
    T: Target<Ctx, Args>,
    Ctx: Payload,
    Args: Payload,
    S: Scheduler,
{
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T, Ctx, Args, S> Debounced<T, Ctx, Args, S>
where
    T: Target<Ctx, Args>,
    T::Output: Clone,
    Ctx: Payload,
    Args: Payload,
    S: Scheduler,
{
    /// Create a new wrapper that reports deferred failures to [`LoggingSink`].
    ///
    /// No timer is started until the first call.
    pub fn new(target: T, wait: Duration, options: DebounceOptions, scheduler: S) -> Self {
        Self::from_parts(target, wait, options, scheduler, Box::new(LoggingSink))
    }

    /// Create a new wrapper that reports deferred failures to `sink`.
    pub fn with_error_sink<K: ErrorSink>(
        target: T,
        wait: Duration,
        options: DebounceOptions,
        scheduler: S,
        sink: K,
    ) -> Self {
        Self::from_parts(target, wait, options, scheduler, Box::new(sink))
    }

    fn from_parts(
        target: T,
        wait: Duration,
        options: DebounceOptions,
        scheduler: S,
        sink: Box<dyn ErrorSink>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                target,
                wait,
                options,
                scheduler,
                sink,
                state: Mutex::new(BurstState::new()),
                running: ReentrantMutex::new(()),
            }),
        }
    }

    /// Call the debounced target with a receiver context and arguments.
    ///
    /// Returns `Ok(Some(output))` when this call executed the leading edge,
    /// and `Ok(None)` when execution was deferred to the trailing edge.
    pub fn call_with(&self, ctx: Ctx, args: Args) -> Result<Option<T::Output>, TargetError> {
        let shared = &self.shared;
        let call = Arc::new(Call { ctx, args });

        let (epoch, lead) = {
            let mut state = shared.state.lock();
            let now = shared.scheduler.now();
            let first = !state.is_open();
            let lead = shared.options.leading && first;
            let epoch = state.next_epoch();

            // Burst state is only written once scheduling has returned.
            let task = fire_task(Arc::downgrade(shared), epoch, !lead);
            let handle = shared.scheduler.schedule_after(shared.wait, task);

            if let Some(previous) = state.pending.replace(PendingTimer { handle, epoch }) {
                shared.scheduler.cancel(previous.handle);
            }
            state.latest = Some(Arc::clone(&call));
            if first {
                state.burst_opened_at = Some(now);
            }
            (epoch, lead)
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(epoch, leading = lead, wait = ?shared.wait, "debounced call recorded");

        if !lead {
            return Ok(None);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(epoch, "executing leading edge");

        let _running = shared.running.lock();
        let outcome = shared.target.invoke(&call.ctx, &call.args);
        let mut state = shared.state.lock();
        match outcome {
            Ok(output) => {
                state.record_success(output.clone());
                Ok(Some(output))
            }
            Err(err) => {
                let failure = TargetError::leading(err);
                state.record_failure(failure.clone());
                // A failed leading call never opens its burst.
                if state.owns(epoch) {
                    if let Some(timer) = state.close() {
                        shared.scheduler.cancel(timer.handle);
                    }
                }
                Err(failure)
            }
        }
    }

    /// Cancel the open burst, if any.
    ///
    /// Once this returns, the burst's trailing execution will not run. The
    /// recorded arguments and last error are discarded, and the next call
    /// opens a new burst. Calling it while idle does nothing.
    pub fn cancel(&self) {
        let shared = &self.shared;
        let mut state = shared.state.lock();
        if let Some(timer) = state.close() {
            shared.scheduler.cancel(timer.handle);

            #[cfg(feature = "tracing")]
            tracing::trace!(epoch = timer.epoch, "debounced burst cancelled");
        }
        state.last_error = None;
    }

    /// Whether a burst is open and its timer has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.shared.state.lock().is_open()
    }

    /// When the currently open burst received its first call.
    ///
    /// Set in both modes, not only when the leading edge is enabled, and
    /// cleared once the burst closes.
    pub fn burst_opened_at(&self) -> Option<Instant> {
        self.shared.state.lock().burst_opened_at
    }

    /// Output of the most recent successful execution.
    pub fn last_result(&self) -> Option<T::Output> {
        self.shared.state.lock().last_result.clone()
    }

    /// Failure of the most recent execution, if it failed.
    pub fn last_error(&self) -> Option<TargetError> {
        self.shared.state.lock().last_error.clone()
    }

    /// Take the stored failure, leaving none behind.
    pub fn take_last_error(&self) -> Option<TargetError> {
        self.shared.state.lock().last_error.take()
    }

    /// The quiescence period.
    pub fn wait(&self) -> Duration {
        self.shared.wait
    }

    /// The options this wrapper was built with.
    pub fn options(&self) -> DebounceOptions {
        self.shared.options
    }
}

impl<T, Args, S> Debounced<T, (), Args, S>
where
    T: Target<(), Args>,
    T::Output: Clone,
    Args: Payload,
    S: Scheduler,
{
    /// Call a context-free debounced target.
    pub fn call(&self, args: Args) -> Result<Option<T::Output>, TargetError> {
        self.call_with((), args)
    }
}

impl<T, Ctx, Args, S> Shared<T, Ctx, Args, S>
where
    T: Target<Ctx, Args>,
    Ctx: Payload,
    Args: Payload,
    S: Scheduler,
{
    fn fire(&self, epoch: u64, run_trailing: bool) {
        let call = {
            let mut state = self.state.lock();
            if !state.owns(epoch) {
                #[cfg(feature = "tracing")]
                tracing::trace!(epoch, "ignoring stale debounce timer");
                return;
            }
            let latest = state.latest.take();
            state.close();
            if !run_trailing {
                return;
            }
            latest
        };
        let Some(call) = call else {
            return;
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(epoch, "executing trailing edge");

        let failure = {
            let _running = self.running.lock();
            let outcome = self.target.invoke(&call.ctx, &call.args);
            let mut state = self.state.lock();
            match outcome {
                Ok(output) => {
                    state.record_success(output);
                    None
                }
                Err(err) => {
                    let failure = TargetError::trailing(err);
                    state.record_failure(failure.clone());
                    Some(failure)
                }
            }
        };
        if let Some(failure) = failure {
            self.sink.report(&failure);
        }
    }
}

fn fire_task<T, Ctx, Args, S>(
    shared: Weak<Shared<T, Ctx, Args, S>>,
    epoch: u64,
    run_trailing: bool,
) -> Task
where
    T: Target<Ctx, Args>,
    Ctx: Payload,
    Args: Payload,
    S: Scheduler,
{
    Box::new(move || {
        if let Some(shared) = shared.upgrade() {
            shared.fire(epoch, run_trailing);
        }
    })
}

/// Builder for constructing a [`Debounced`] wrapper.
///
/// Configuration errors are collected and reported by [`build`](Self::build),
/// so an invalid wrapper is never constructed.
pub struct DebounceBuilder<T, S> {
    target: T,
    scheduler: S,
    wait: Result<Duration, ConfigError>,
    options: DebounceOptions,
    sink: Option<Box<dyn ErrorSink>>,
}

impl<T, S> DebounceBuilder<T, S> {
    /// Start building a wrapper around `target`, driven by `scheduler`.
    ///
    /// The wait defaults to zero and the options to trailing-only.
    pub fn new(target: T, scheduler: S) -> Self {
        Self {
            target,
            scheduler,
            wait: Ok(Duration::ZERO),
            options: DebounceOptions::default(),
            sink: None,
        }
    }

    /// Set the quiescence period.
    pub fn wait(mut self, wait: Duration) -> Self {
        self.wait = Ok(wait);
        self
    }

    /// Set the quiescence period in milliseconds. Negative values make
    /// [`build`](Self::build) fail.
    pub fn wait_millis(mut self, millis: i64) -> Self {
        self.wait = wait_from_millis(millis);
        self
    }

    /// Enable or disable leading-edge execution.
    pub fn leading(mut self, leading: bool) -> Self {
        self.options.leading = leading;
        self
    }

    /// Replace all options at once.
    pub fn options(mut self, options: DebounceOptions) -> Self {
        self.options = options;
        self
    }

    /// Report deferred failures to `sink` instead of [`LoggingSink`].
    pub fn error_sink<K: ErrorSink>(mut self, sink: K) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the wrapper.
    pub fn build<Ctx, Args>(self) -> Result<Debounced<T, Ctx, Args, S>, ConfigError>
    where
        T: Target<Ctx, Args>,
        T::Output: Clone,
        Ctx: Payload,
        Args: Payload,
        S: Scheduler,
    {
        let wait = self.wait?;
        let sink = self.sink.unwrap_or_else(|| Box::new(LoggingSink));
        Ok(Debounced::from_parts(
            self.target,
            wait,
            self.options,
            self.scheduler,
            sink,
        ))
    }
}

/// Debounce `target` on the tokio runtime the caller is running in.
///
/// Fails with [`SchedulerError::NoRuntime`] outside a runtime.
#[cfg(feature = "tokio")]
pub fn debounce<T, Ctx, Args>(
    target: T,
    wait: Duration,
    options: DebounceOptions,
) -> Result<Debounced<T, Ctx, Args, TokioScheduler>, SchedulerError>
where
    T: Target<Ctx, Args>,
    T::Output: Clone,
    Ctx: Payload,
    Args: Payload,
{
    let scheduler = TokioScheduler::current()?;
    Ok(Debounced::new(target, wait, options, scheduler))
}
