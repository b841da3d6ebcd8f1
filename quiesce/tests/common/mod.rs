#![allow(dead_code)]

use parking_lot::Mutex;
use quiesce::{BoxError, Scheduler, Target, testing::ManualScheduler};
use std::{sync::Arc, time::Instant};

// ============================================================================
// Test Inputs
// ============================================================================

/// What a user types into a search box, one keystroke every 500ms.
pub const TYPING: [&str; 5] = ["H", "HE", "HEL", "HELL", "HELLO"];

// ============================================================================
// Test Targets
// ============================================================================

/// Records each execution together with the virtual time it ran at.
#[derive(Clone)]
pub struct TimedLog {
    pub scheduler: Arc<ManualScheduler>,
    pub origin: Instant,
    pub entries: Arc<Mutex<Vec<(u64, &'static str)>>>,
}

impl TimedLog {
    pub fn new(scheduler: &Arc<ManualScheduler>) -> Self {
        Self {
            scheduler: scheduler.clone(),
            origin: scheduler.now(),
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn entries(&self) -> Vec<(u64, &'static str)> {
        self.entries.lock().clone()
    }
}

impl Target<(), &'static str> for TimedLog {
    type Output = ();

    fn invoke(&self, _ctx: &(), args: &&'static str) -> Result<(), BoxError> {
        let at = self.scheduler.now() - self.origin;
        self.entries.lock().push((at.as_millis() as u64, *args));
        Ok(())
    }
}

/// Fails for every argument starting with `!`.
pub struct Picky;

impl Target<(), &'static str> for Picky {
    type Output = usize;

    fn invoke(&self, _ctx: &(), args: &&'static str) -> Result<usize, BoxError> {
        match args.strip_prefix('!') {
            Some(rest) => Err(format!("rejected {rest}").into()),
            None => Ok(args.len()),
        }
    }
}

/// Blocks for a fixed time on every execution and tracks how many
/// executions overlap.
#[derive(Clone)]
pub struct SlowTarget {
    pub busy_for: std::time::Duration,
    pub active: Arc<std::sync::atomic::AtomicUsize>,
    pub max_active: Arc<std::sync::atomic::AtomicUsize>,
    pub finished: Arc<Mutex<Vec<u32>>>,
}

impl SlowTarget {
    pub fn new(busy_for: std::time::Duration) -> Self {
        Self {
            busy_for,
            active: Arc::default(),
            max_active: Arc::default(),
            finished: Arc::default(),
        }
    }

    pub fn max_active(&self) -> usize {
        self.max_active.load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn finished(&self) -> Vec<u32> {
        self.finished.lock().clone()
    }
}

impl Target<(), u32> for SlowTarget {
    type Output = u32;

    fn invoke(&self, _ctx: &(), args: &u32) -> Result<u32, BoxError> {
        use std::sync::atomic::Ordering;

        let now_active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(now_active, Ordering::SeqCst);
        std::thread::sleep(self.busy_for);
        self.finished.lock().push(*args);
        self.active.fetch_sub(1, Ordering::SeqCst);
        Ok(*args)
    }
}
