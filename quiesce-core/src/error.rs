//! Error types for Quiesce.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`DebounceError`] - Top-level error type for all Quiesce operations
//! - [`TargetError`] - Failures of the wrapped target, tagged with the edge that ran it
//! - [`ConfigError`] - Invalid wrapper configuration
//! - [`SchedulerError`] - Problems obtaining a host scheduler

use std::sync::Arc;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
///
/// This is what a [`Target`](crate::Target) returns when it fails.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A reference-counted error, so a single failure can be stored and reported.
pub type SharedError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Which edge of a burst executed the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The synchronous execution made by the first call of a burst.
    Leading,
    /// The deferred execution made when the quiescence period elapses.
    Trailing,
}

/// Top-level error type for all Quiesce operations.
#[derive(Error, Debug)]
pub enum DebounceError {
    /// The wrapper configuration was rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The wrapped target failed.
    #[error(transparent)]
    Target(#[from] TargetError),

    /// No scheduler could be obtained.
    #[error("scheduler error: {0}")]
    Scheduler(#[from] SchedulerError),
}

/// A failure of the wrapped target.
#[derive(Error, Debug, Clone)]
pub enum TargetError {
    /// The leading (synchronous) execution failed.
    ///
    /// Returned directly to the caller whose call triggered it.
    #[error("leading call failed: {0}")]
    Leading(#[source] SharedError),

    /// The trailing (deferred) execution failed.
    ///
    /// No caller is waiting for it, so it is reported through the wrapper's
    /// error sink and kept as the wrapper's last error.
    #[error("trailing call failed: {0}")]
    Trailing(#[source] SharedError),
}

impl TargetError {
    /// Wrap a leading-edge failure.
    pub fn leading(err: BoxError) -> Self {
        TargetError::Leading(Arc::from(err))
    }

    /// Wrap a trailing-edge failure.
    pub fn trailing(err: BoxError) -> Self {
        TargetError::Trailing(Arc::from(err))
    }

    /// The edge whose execution failed.
    pub fn edge(&self) -> Edge {
        match self {
            TargetError::Leading(_) => Edge::Leading,
            TargetError::Trailing(_) => Edge::Trailing,
        }
    }

    /// The error returned by the target.
    pub fn inner(&self) -> &SharedError {
        match self {
            TargetError::Leading(err) | TargetError::Trailing(err) => err,
        }
    }
}

/// Errors that can occur while configuring a wrapper.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The wait duration was negative.
    #[error("wait must not be negative, got {0}ms")]
    NegativeWait(i64),
}

/// Errors that can occur while obtaining a scheduler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// No async runtime is running on the current thread.
    #[error("no runtime available on the current thread")]
    NoRuntime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_error_edge() {
        let err = TargetError::leading("boom".into());
        assert_eq!(err.edge(), Edge::Leading);
        assert_eq!(err.to_string(), "leading call failed: boom");

        let err = TargetError::trailing("late boom".into());
        assert_eq!(err.edge(), Edge::Trailing);
        assert_eq!(err.inner().to_string(), "late boom");
    }

    #[test]
    fn test_target_error_source() {
        use std::error::Error;

        let err = TargetError::trailing("inner".into());
        let source = err.source().expect("trailing error carries a source");
        assert_eq!(source.to_string(), "inner");
    }

    #[test]
    fn test_debounce_error_conversions() {
        let err: DebounceError = ConfigError::NegativeWait(-5).into();
        assert!(err.to_string().contains("-5ms"));

        let err: DebounceError = SchedulerError::NoRuntime.into();
        assert!(matches!(err, DebounceError::Scheduler(SchedulerError::NoRuntime)));

        let err: DebounceError = TargetError::leading("x".into()).into();
        assert_eq!(err.to_string(), "leading call failed: x");
    }
}
