//! Channel sink for consuming deferred failures elsewhere.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use quiesce_core::{ErrorSink, TargetError};

/// A sink that forwards failures into an unbounded channel.
///
/// Failures reported after the receiver is dropped are discarded.
///
/// # Example
///
/// ```rust,ignore
/// let (sink, mut failures) = ChannelSink::new();
/// let debounced = DebounceBuilder::new(target, scheduler).error_sink(sink).build()?;
///
/// while let Some(failure) = failures.next().await {
///     eprintln!("{failure}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: UnboundedSender<TargetError>,
}

impl ChannelSink {
    /// Create a sink and the receiver its failures arrive on.
    pub fn new() -> (Self, UnboundedReceiver<TargetError>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }
}

impl ErrorSink for ChannelSink {
    fn report(&self, failure: &TargetError) {
        let _ = self.tx.unbounded_send(failure.clone());
    }
}
