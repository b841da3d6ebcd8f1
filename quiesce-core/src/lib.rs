//! # quiesce-core
//!
//! Core traits for the Quiesce debouncing toolkit.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! integrations that provide their own schedulers, targets or error sinks
//! without pulling in the standard implementations of `quiesce-std`.
//!
//! # Building Blocks
//!
//! ## [`Target`]
//!
//! The function being debounced. It receives the receiver context and the
//! arguments of the call that survived a burst, and returns a result.
//! Closures of the form `Fn(&Ctx, &Args) -> Result<Out, E>` are targets.
//!
//! ## [`Scheduler`]
//!
//! The host's deferred-execution facility: run a task after a delay, cancel
//! it again, and tell the time. A wrapper owns at most one scheduled task at
//! any moment.
//!
//! ## [`ErrorSink`]
//!
//! Where failures of deferred executions go. The trailing execution has no
//! caller waiting on it, so its error is reported here instead.
//!
//! ## [`DebounceOptions`]
//!
//! Per-wrapper configuration: currently whether the leading edge executes.
//!
//! # Error Types
//!
//! - [`DebounceError`] - Top-level error type
//! - [`TargetError`] - Target failures, tagged with their [`Edge`]
//! - [`ConfigError`] - Invalid configuration
//! - [`SchedulerError`] - Scheduler acquisition errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod options;
mod payload;
mod scheduler;
mod sink;
mod target;

// Re-exports
pub use error::{
    BoxError, ConfigError, DebounceError, Edge, SchedulerError, SharedError, TargetError,
};
pub use options::{DebounceOptions, wait_from_millis};
pub use payload::Payload;
pub use scheduler::{FAR_FUTURE, Scheduler, Task};
pub use sink::ErrorSink;
pub use target::{FnTarget, Target, TargetOutput, target_fn};
