//! # Debounced Callback
//!
//! Lifecycle adapter for hosts that keep one debounced callback alive across
//! updates: component trees, reactive views, long-lived controllers.
//!
//! The host owns a [`DebouncedCallback`] and tells it what changed:
//!
//! - a new target closure: [`set_target`](DebouncedCallback::set_target).
//!   The active wrapper keeps its burst, and the newest target runs when
//!   the burst fires.
//! - a new wait or new options: [`reconfigure`](DebouncedCallback::reconfigure).
//!   The wrapper is rebuilt only if something actually differs.
//! - any other dependency: [`rebuild`](DebouncedCallback::rebuild).
//! - teardown: drop the adapter. The active wrapper is cancelled exactly once.
//!
//! Rebuilding cancels the previous wrapper's open burst, so a superseded
//! configuration never executes.

use parking_lot::RwLock;
use quiesce_core::{
    BoxError, DebounceOptions, ErrorSink, Payload, Scheduler, Target, TargetError,
};
use quiesce_std::{debounce::Debounced, sinks::LoggingSink};
use std::{sync::Arc, time::Duration};

/// A shared slot holding the most recent target.
///
/// Every clone sees the same slot, so replacing the target through one clone
/// is visible to a wrapper holding another.
pub struct LatestTarget<T> {
    current: Arc<RwLock<Arc<T>>>,
}

impl<T> LatestTarget<T> {
    /// Create a slot holding `target`.
    pub fn new(target: T) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(target))),
        }
    }

    /// Swap in a new target.
    pub fn replace(&self, target: T) {
        *self.current.write() = Arc::new(target);
    }

    /// The current target.
    pub fn get(&self) -> Arc<T> {
        Arc::clone(&self.current.read())
    }
}

impl<T> Clone for LatestTarget<T> {
    fn clone(&self) -> Self {
        Self {
            current: Arc::clone(&self.current),
        }
    }
}

impl<T, Ctx, Args> Target<Ctx, Args> for LatestTarget<T>
where
    T: Target<Ctx, Args>,
    Ctx: Payload,
    Args: Payload,
{
    type Output = T::Output;

    fn invoke(&self, ctx: &Ctx, args: &Args) -> Result<Self::Output, BoxError> {
        // Release the slot before running, so the target may replace itself.
        let target = self.get();
        target.invoke(ctx, args)
    }
}

/// A debounced callback that survives configuration changes.
///
/// # Example
///
/// ```rust,ignore
/// let mut search = DebouncedCallback::new(
///     target_fn(|query: &String| backend.search(query)),
///     Duration::from_millis(300),
///     DebounceOptions::default(),
///     scheduler,
/// );
///
/// search.call(input.clone())?;
///
/// // The view re-rendered with a new closure: keep the pending burst.
/// search.set_target(target_fn(|query: &String| other_backend.search(query)));
///
/// // The user changed the delay setting: start over with the new wait.
/// search.reconfigure(Duration::from_millis(500), DebounceOptions::default());
/// ```
pub struct DebouncedCallback<T, Ctx, Args, S>
where
    T: Target<Ctx, Args>,
    T::Output: Clone,
    Ctx: Payload,
    Args: Payload,
    S: Scheduler + Clone,
{
    target: LatestTarget<T>,
    scheduler: S,
    wait: Duration,
    options: DebounceOptions,
    sink: Arc<dyn ErrorSink>,
    active: Debounced<LatestTarget<T>, Ctx, Args, S>,
}

impl<T, Ctx, Args, S> DebouncedCallback<T, Ctx, Args, S>
where
    T: Target<Ctx, Args>,
    T::Output: Clone,
    Ctx: Payload,
    Args: Payload,
    S: Scheduler + Clone,
{
    /// Create the adapter and its first wrapper.
    pub fn new(target: T, wait: Duration, options: DebounceOptions, scheduler: S) -> Self {
        let target = LatestTarget::new(target);
        let sink: Arc<dyn ErrorSink> = Arc::new(LoggingSink);
        let active = build(&target, wait, options, &scheduler, &sink);
        Self {
            target,
            scheduler,
            wait,
            options,
            sink,
            active,
        }
    }

    /// Report deferred failures to `sink`, now and after every rebuild.
    ///
    /// Rebuilds the active wrapper.
    pub fn with_error_sink<K: ErrorSink>(mut self, sink: K) -> Self {
        self.sink = Arc::new(sink);
        self.rebuild();
        self
    }

    /// Forward a new target into the active wrapper without rebuilding it.
    pub fn set_target(&self, target: T) {
        self.target.replace(target);
    }

    /// Apply a new wait and options.
    ///
    /// Rebuilds the wrapper only if either differs from the current value,
    /// and returns whether it did.
    pub fn reconfigure(&mut self, wait: Duration, options: DebounceOptions) -> bool {
        if wait == self.wait && options == self.options {
            return false;
        }
        self.wait = wait;
        self.options = options;
        self.rebuild();
        true
    }

    /// Replace the active wrapper with a fresh one.
    ///
    /// The previous wrapper's open burst is cancelled.
    pub fn rebuild(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            wait = ?self.wait,
            leading = self.options.leading,
            "rebuilding debounced callback"
        );

        let next = build(
            &self.target,
            self.wait,
            self.options,
            &self.scheduler,
            &self.sink,
        );
        let previous = std::mem::replace(&mut self.active, next);
        previous.cancel();
    }

    /// Call the active wrapper with a receiver context.
    pub fn call_with(&self, ctx: Ctx, args: Args) -> Result<Option<T::Output>, TargetError> {
        self.active.call_with(ctx, args)
    }

    /// Cancel the active wrapper's open burst.
    pub fn cancel(&self) {
        self.active.cancel();
    }

    /// Whether the active wrapper has an open burst.
    pub fn is_pending(&self) -> bool {
        self.active.is_pending()
    }

    /// The current wait.
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// The current options.
    pub fn options(&self) -> DebounceOptions {
        self.options
    }

    /// The active wrapper.
    ///
    /// The returned handle keeps working after a rebuild, but it then belongs
    /// to a cancelled, superseded wrapper.
    pub fn debounced(&self) -> &Debounced<LatestTarget<T>, Ctx, Args, S> {
        &self.active
    }
}

impl<T, Args, S> DebouncedCallback<T, (), Args, S>
where
    T: Target<(), Args>,
    T::Output: Clone,
    Args: Payload,
    S: Scheduler + Clone,
{
    /// Call the active wrapper of a context-free target.
    pub fn call(&self, args: Args) -> Result<Option<T::Output>, TargetError> {
        self.active.call(args)
    }
}

impl<T, Ctx, Args, S> Drop for DebouncedCallback<T, Ctx, Args, S>
where
    T: Target<Ctx, Args>,
    T::Output: Clone,
    Ctx: Payload,
    Args: Payload,
    S: Scheduler + Clone,
{
    fn drop(&mut self) {
        self.active.cancel();
    }
}

fn build<T, Ctx, Args, S>(
    target: &LatestTarget<T>,
    wait: Duration,
    options: DebounceOptions,
    scheduler: &S,
    sink: &Arc<dyn ErrorSink>,
) -> Debounced<LatestTarget<T>, Ctx, Args, S>
where
    T: Target<Ctx, Args>,
    T::Output: Clone,
    Ctx: Payload,
    Args: Payload,
    S: Scheduler + Clone,
{
    let sink = Arc::clone(sink);
    Debounced::with_error_sink(
        target.clone(),
        wait,
        options,
        scheduler.clone(),
        move |failure: &TargetError| sink.report(failure),
    )
}
