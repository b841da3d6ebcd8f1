//! Manual Scheduler - virtual time driven by the host.
//!
//! Nothing fires on its own. The host moves the clock forward with
//! [`ManualScheduler::advance`] and every task whose deadline is reached
//! runs on the caller's thread, in deadline order. Useful for frame- or
//! tick-driven hosts, and for testing debounced code deterministically.

use parking_lot::Mutex;
use quiesce_core::{FAR_FUTURE, Scheduler, Task};
use std::{
    collections::BTreeMap,
    time::{Duration, Instant},
};

/// Handle to a task scheduled on a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManualTimer {
    deadline: Duration,
    seq: u64,
}

impl ManualTimer {
    /// Time since the scheduler's origin at which the task becomes due.
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

struct TimerQueue {
    elapsed: Duration,
    next_seq: u64,
    timers: BTreeMap<ManualTimer, Task>,
}

/// A scheduler whose clock only moves when told to.
///
/// # Example
///
/// ```rust,ignore
/// let scheduler = ManualScheduler::new();
/// scheduler.schedule_after(Duration::from_millis(10), Box::new(|| println!("due")));
/// assert_eq!(scheduler.advance(Duration::from_millis(10)), 1);
/// ```
pub struct ManualScheduler {
    origin: Instant,
    queue: Mutex<TimerQueue>,
}

impl ManualScheduler {
    /// Create a scheduler whose clock starts now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            queue: Mutex::new(TimerQueue {
                elapsed: Duration::ZERO,
                next_seq: 0,
                timers: BTreeMap::new(),
            }),
        }
    }

    /// Virtual time elapsed since creation.
    pub fn elapsed(&self) -> Duration {
        self.queue.lock().elapsed
    }

    /// Number of tasks waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue.lock().timers.len()
    }

    /// Move the clock forward by `by`, running every task that becomes due.
    ///
    /// Tasks run in deadline order with the clock set to their deadline.
    /// Tasks scheduled while advancing also run if they fall due within the
    /// window. Returns the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let until = self.elapsed().saturating_add(by);
        let mut fired = 0;
        loop {
            let task = {
                let mut queue = self.queue.lock();
                let Some(entry) = queue.timers.first_entry() else {
                    break;
                };
                if entry.key().deadline > until {
                    break;
                }
                let (timer, task) = entry.remove_entry();
                queue.elapsed = queue.elapsed.max(timer.deadline);
                task
            };
            // Run outside the lock: tasks may schedule or cancel.
            task();
            fired += 1;
        }
        let mut queue = self.queue.lock();
        queue.elapsed = queue.elapsed.max(until);
        fired
    }

    /// Shorthand for [`advance`](Self::advance) in milliseconds.
    pub fn advance_millis(&self, millis: u64) -> usize {
        self.advance(Duration::from_millis(millis))
    }

    /// Keep advancing to the next deadline until no task is left.
    pub fn run_until_idle(&self) -> usize {
        let mut fired = 0;
        loop {
            let next = {
                let queue = self.queue.lock();
                match queue.timers.keys().next() {
                    Some(timer) => timer.deadline.saturating_sub(queue.elapsed),
                    None => break,
                }
            };
            fired += self.advance(next);
        }
        fired
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }

    fn schedule_after(&self, delay: Duration, task: Task) -> ManualTimer {
        let mut queue = self.queue.lock();
        let timer = ManualTimer {
            deadline: queue.elapsed.saturating_add(delay.min(FAR_FUTURE)),
            seq: queue.next_seq,
        };
        queue.next_seq += 1;
        queue.timers.insert(timer, task);
        timer
    }

    fn cancel(&self, handle: ManualTimer) {
        self.queue.lock().timers.remove(&handle);
    }
}
