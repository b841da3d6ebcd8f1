//! Logging sink for deferred failures.

use quiesce_core::{ErrorSink, TargetError};

/// A sink that logs failures.
///
/// Emits a `tracing` error event when the `tracing` feature is enabled,
/// and does nothing otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

impl ErrorSink for LoggingSink {
    fn report(&self, failure: &TargetError) {
        #[cfg(feature = "tracing")]
        {
            tracing::error!(
                edge = ?failure.edge(),
                error = %failure.inner(),
                "debounced call failed"
            );
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = failure; // Suppress unused warning
        }
    }
}
