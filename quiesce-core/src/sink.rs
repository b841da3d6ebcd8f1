//! Error sinks for deferred failures.
//!
//! A trailing execution runs on the scheduler's timer, long after the call
//! that scheduled it has returned. When it fails there is nobody to hand the
//! error to, so the wrapper reports it to an [`ErrorSink`].

use crate::error::TargetError;

/// Receives failures of deferred executions.
pub trait ErrorSink: Send + Sync + 'static {
    /// Called once for every failed trailing execution.
    fn report(&self, failure: &TargetError);
}

// Blanket impl for closures
impl<F> ErrorSink for F
where
    F: Fn(&TargetError) + Send + Sync + 'static,
{
    fn report(&self, failure: &TargetError) {
        (self)(failure)
    }
}
