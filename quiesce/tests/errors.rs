//! Failure surfacing on both edges.

use futures::{StreamExt, executor::block_on};
use quiesce::{
    DebounceBuilder, DebounceOptions, Debounced, Edge, TargetError,
    sinks::ChannelSink,
    testing::{CollectingSink, ManualScheduler},
};
use std::{sync::Arc, time::Duration};

mod common;
use common::Picky;

const WAIT: Duration = Duration::from_millis(1000);

#[test]
fn test_leading_failure_returns_to_caller_and_closes_burst() {
    let scheduler = Arc::new(ManualScheduler::new());
    let sink = CollectingSink::new();
    let debounced = Debounced::with_error_sink(
        Picky,
        WAIT,
        DebounceOptions::leading(),
        scheduler.clone(),
        sink.clone(),
    );

    let err = debounced.call("!first").unwrap_err();
    assert_eq!(err.edge(), Edge::Leading);
    assert_eq!(err.to_string(), "leading call failed: rejected first");
    assert!(!debounced.is_pending());
    assert_eq!(scheduler.pending(), 0);

    // Leading failures never reach the sink; the caller already has them.
    assert_eq!(sink.count(), 0);

    // The next call starts a new burst and leads again.
    assert_eq!(debounced.call("second").unwrap(), Some(6));
}

#[test]
fn test_trailing_failure_reaches_channel() {
    let scheduler = Arc::new(ManualScheduler::new());
    let (sink, mut failures) = ChannelSink::new();
    let debounced = Debounced::with_error_sink(
        Picky,
        WAIT,
        DebounceOptions::default(),
        scheduler.clone(),
        sink,
    );

    debounced.call("ok").unwrap();
    debounced.call("!late").unwrap();
    scheduler.run_until_idle();

    let failure: TargetError = block_on(failures.next()).unwrap();
    assert_eq!(failure.edge(), Edge::Trailing);
    assert_eq!(failure.inner().to_string(), "rejected late");
    assert!(debounced.last_error().is_some());
}

#[test]
fn test_trailing_success_is_observable() {
    let scheduler = Arc::new(ManualScheduler::new());
    let debounced = DebounceBuilder::new(Picky, scheduler.clone())
        .wait_millis(1000)
        .build::<(), &'static str>()
        .unwrap();

    debounced.call("!bad").unwrap();
    scheduler.run_until_idle();
    assert!(debounced.take_last_error().is_some());

    debounced.call("HELLO").unwrap();
    scheduler.run_until_idle();
    assert_eq!(debounced.last_result(), Some(5));
    assert!(debounced.last_error().is_none());
}

#[test]
fn test_negative_wait_is_rejected_at_build() {
    let scheduler = Arc::new(ManualScheduler::new());
    let result = DebounceBuilder::new(Picky, scheduler)
        .wait_millis(-1)
        .build::<(), &'static str>();

    let err = result.err().unwrap();
    assert_eq!(err.to_string(), "wait must not be negative, got -1ms");
}
