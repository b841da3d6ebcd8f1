//! Standard error sink implementations.

pub mod channel;
pub mod logging;

pub use channel::ChannelSink;
pub use logging::LoggingSink;

use quiesce_core::{ErrorSink, TargetError};

/// A sink that drops every failure.
///
/// The failure is still kept as the wrapper's last error.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ErrorSink for NoopSink {
    fn report(&self, _failure: &TargetError) {}
}
