//! # quiesce-std
//!
//! Standard implementations for the Quiesce debouncing toolkit.
//!
//! This crate provides:
//! - **The debounced wrapper**: [`Debounced`], [`DebounceBuilder`]
//! - **Schedulers**: [`ManualScheduler`], and `TokioScheduler` with the `tokio` feature
//! - **Error sinks**: [`LoggingSink`], [`ChannelSink`], [`NoopSink`]
//! - **Testing utilities**: recording targets and a collecting sink
//!
//! [`Debounced`]: debounce::Debounced
//! [`DebounceBuilder`]: debounce::DebounceBuilder
//! [`ManualScheduler`]: schedulers::ManualScheduler
//! [`LoggingSink`]: sinks::LoggingSink
//! [`ChannelSink`]: sinks::ChannelSink
//! [`NoopSink`]: sinks::NoopSink

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use quiesce_core;

// Modules
pub mod debounce;
pub mod schedulers;
pub mod sinks;
pub mod testing;
