//! # quiesce - Debounced Calls
//!
//! `quiesce` wraps a function so that a burst of calls collapses into a
//! single execution once the calls have quietened down for a given wait.
//! With leading mode enabled, the first call of a burst also runs
//! immediately.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quiesce::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), DebounceError> {
//!     let save = quiesce::debounce(
//!         target_fn(|draft: &String| store(draft)),
//!         Duration::from_millis(500),
//!         DebounceOptions::default(),
//!     )?;
//!
//!     for draft in ["H", "HE", "HEL", "HELL", "HELLO"] {
//!         save.call(draft.to_string())?;
//!     }
//!     // `store` runs once, with "HELLO", 500ms after the last call.
//!     tokio::time::sleep(Duration::from_millis(600)).await;
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Layout
//!
//! - `quiesce-core`: the traits ([`Target`], [`Scheduler`], [`ErrorSink`])
//!   and error types
//! - `quiesce-std`: the [`Debounced`] wrapper, schedulers, sinks and testing
//!   utilities
//! - this crate: re-exports plus the [`DebouncedCallback`] lifecycle adapter

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod callback;

pub use callback::{DebouncedCallback, LatestTarget};

pub use quiesce_core::{
    // Error types
    BoxError,
    ConfigError,
    // Configuration
    DebounceOptions,
    DebounceError,
    Edge,
    FAR_FUTURE,
    // Sinks
    ErrorSink,
    FnTarget,
    // Payload
    Payload,
    // Scheduling
    Scheduler,
    SchedulerError,
    SharedError,
    // Targets
    Target,
    TargetError,
    TargetOutput,
    Task,
    target_fn,
    wait_from_millis,
};

// The wrapper
pub use quiesce_std::debounce::{DebounceBuilder, Debounced};

#[cfg(feature = "tokio")]
pub use quiesce_std::debounce::debounce;

/// Standard scheduler implementations.
pub mod schedulers {
    #![allow(clippy::wildcard_imports)]
    pub use quiesce_std::schedulers::*;
}

/// Standard error sinks.
pub mod sinks {
    #![allow(clippy::wildcard_imports)]
    pub use quiesce_std::sinks::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use quiesce_std::testing::*;
}

/// Prelude module - common imports for Quiesce.
///
/// # Usage
///
/// ```rust,ignore
/// use quiesce::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        ConfigError,
        // Configuration
        DebounceBuilder,
        DebounceError,
        DebounceOptions,
        // Wrapper
        Debounced,
        DebouncedCallback,
        ErrorSink,
        // Core traits
        Scheduler,
        Target,
        TargetError,
        target_fn,
    };
}
