//! Burst state of a single wrapper instance.

use quiesce_core::TargetError;
use std::{sync::Arc, time::Instant};

/// The receiver context and arguments of one call.
pub(crate) struct Call<Ctx, Args> {
    pub(crate) ctx: Ctx,
    pub(crate) args: Args,
}

/// The timer currently owned by the wrapper.
pub(crate) struct PendingTimer<H> {
    pub(crate) handle: H,
    pub(crate) epoch: u64,
}

/// Mutable state of a debounced wrapper.
///
/// `pending` is `Some` iff a burst is open, and `burst_opened_at` is `Some`
/// iff `pending` is.
pub(crate) struct BurstState<Ctx, Args, Out, H> {
    pub(crate) pending: Option<PendingTimer<H>>,
    pub(crate) burst_opened_at: Option<Instant>,
    pub(crate) latest: Option<Arc<Call<Ctx, Args>>>,
    pub(crate) last_result: Option<Out>,
    pub(crate) last_error: Option<TargetError>,
    epoch: u64,
}

impl<Ctx, Args, Out, H> BurstState<Ctx, Args, Out, H> {
    pub(crate) fn new() -> Self {
        Self {
            pending: None,
            burst_opened_at: None,
            latest: None,
            last_result: None,
            last_error: None,
            epoch: 0,
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Tag for the next timer. Never reused within one instance.
    pub(crate) fn next_epoch(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }

    /// Whether the timer tagged `epoch` is the one currently pending.
    pub(crate) fn owns(&self, epoch: u64) -> bool {
        self.pending.as_ref().is_some_and(|timer| timer.epoch == epoch)
    }

    /// Close the open burst, handing back its timer.
    pub(crate) fn close(&mut self) -> Option<PendingTimer<H>> {
        self.burst_opened_at = None;
        self.latest = None;
        self.pending.take()
    }

    pub(crate) fn record_success(&mut self, output: Out) {
        self.last_result = Some(output);
        self.last_error = None;
    }

    pub(crate) fn record_failure(&mut self, failure: TargetError) {
        self.last_error = Some(failure);
    }
}
