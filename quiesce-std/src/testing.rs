//! Testing utilities for Quiesce.
//!
//! This module provides utilities to make testing debounced code easier.
//!
//! # Features
//!
//! - [`ManualScheduler`]: A virtual-time scheduler advanced by the test
//! - [`RecordingTarget`]: A target that records the arguments it runs with
//! - [`CountingTarget`]: A target that only counts executions
//! - [`SpyTarget`]: A target that records arguments and can be told to fail
//! - [`CollectingSink`]: An error sink that keeps every reported failure

use parking_lot::Mutex;
use quiesce_core::{BoxError, ErrorSink, Payload, Target, TargetError};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

pub use crate::schedulers::ManualScheduler;

// ============================================================================
// Recording Target
// ============================================================================

/// A target that records the arguments of every execution.
///
/// Returns the 1-based number of the execution, so tests can tell which run
/// produced a leading result.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingTarget::new();
/// let debounced = Debounced::new(recorder.clone(), wait, options, scheduler.clone());
///
/// debounced.call("H")?;
/// debounced.call("HE")?;
/// scheduler.advance(wait);
///
/// assert_eq!(recorder.calls(), vec!["HE"]);
/// ```
pub struct RecordingTarget<Args> {
    calls: Arc<Mutex<Vec<Args>>>,
}

impl<Args: Clone> RecordingTarget<Args> {
    /// Create a new recording target.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded arguments.
    pub fn calls(&self) -> Vec<Args> {
        self.calls.lock().clone()
    }

    /// Get the number of executions.
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Clear all recorded arguments.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl<Args: Clone> Default for RecordingTarget<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Clone for RecordingTarget<Args> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

impl<Args: Payload + Clone> Target<(), Args> for RecordingTarget<Args> {
    type Output = usize;

    fn invoke(&self, _ctx: &(), args: &Args) -> Result<usize, BoxError> {
        let mut calls = self.calls.lock();
        calls.push(args.clone());
        Ok(calls.len())
    }
}

// ============================================================================
// Counting Target
// ============================================================================

/// A target that counts executions and ignores its arguments.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingTarget::new();
/// let debounced = Debounced::new(counter.clone(), wait, options, scheduler.clone());
///
/// debounced.call(1)?;
/// scheduler.advance(wait);
///
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingTarget {
    count: Arc<AtomicUsize>,
}

impl CountingTarget {
    /// Create a new counting target.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingTarget {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl<Args: Payload> Target<(), Args> for CountingTarget {
    type Output = ();

    fn invoke(&self, _ctx: &(), _args: &Args) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Spy Target
// ============================================================================

/// A target that records its inputs and can be programmed to fail.
///
/// # Example
///
/// ```rust,ignore
/// let spy = SpyTarget::new();
/// spy.set_error("backend unavailable");
///
/// let err = debounced.call("A").unwrap_err();
/// assert_eq!(spy.call_count(), 1);
/// ```
pub struct SpyTarget<Args> {
    inputs: Arc<Mutex<Vec<Args>>>,
    should_error: Arc<Mutex<Option<String>>>,
}

impl<Args: Clone> SpyTarget<Args> {
    /// Create a new spy target that succeeds.
    pub fn new() -> Self {
        Self {
            inputs: Arc::new(Mutex::new(Vec::new())),
            should_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Make every following execution fail with `error`.
    pub fn set_error(&self, error: impl Into<String>) {
        *self.should_error.lock() = Some(error.into());
    }

    /// Clear error state.
    pub fn clear_error(&self) {
        *self.should_error.lock() = None;
    }

    /// Get recorded inputs.
    pub fn inputs(&self) -> Vec<Args> {
        self.inputs.lock().clone()
    }

    /// Get the number of executions, failed ones included.
    pub fn call_count(&self) -> usize {
        self.inputs.lock().len()
    }
}

impl<Args: Clone> Default for SpyTarget<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Clone for SpyTarget<Args> {
    fn clone(&self) -> Self {
        Self {
            inputs: self.inputs.clone(),
            should_error: self.should_error.clone(),
        }
    }
}

impl<Args: Payload + Clone> Target<(), Args> for SpyTarget<Args> {
    type Output = ();

    fn invoke(&self, _ctx: &(), args: &Args) -> Result<(), BoxError> {
        self.inputs.lock().push(args.clone());

        if let Some(ref err) = *self.should_error.lock() {
            return Err(err.clone().into());
        }
        Ok(())
    }
}

// ============================================================================
// Collecting Sink
// ============================================================================

/// An error sink that keeps every failure reported to it.
#[derive(Clone, Default)]
pub struct CollectingSink {
    failures: Arc<Mutex<Vec<TargetError>>>,
}

impl CollectingSink {
    /// Create a new, empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the reported failures.
    pub fn failures(&self) -> Vec<TargetError> {
        self.failures.lock().clone()
    }

    /// Get the number of reported failures.
    pub fn count(&self) -> usize {
        self.failures.lock().len()
    }
}

impl ErrorSink for CollectingSink {
    fn report(&self, failure: &TargetError) {
        self.failures.lock().push(failure.clone());
    }
}
