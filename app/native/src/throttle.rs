//! Trailing-edge timeout throttling for rapid UI events.
//!
//! Resize events can arrive dozens of times per second while the user drags a
//! window edge. Re-classifying the viewport on each one is wasteful, so events
//! are funnelled through a [`TimeoutThrottler`]: each event class owns at most
//! one pending timer, and scheduling a new firing replaces the previous one.
//! The callback therefore runs once, `delay` after the last event of a burst.
//!
//! # Clocks
//!
//! The throttler never sleeps. It reads time from a [`Clock`] and fires due
//! timers when [`TimeoutThrottler::fire_due`] is called by the host loop. Use
//! [`SystemClock`] in real hosts and [`ManualClock`] to drive time explicitly.

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;
use std::time::{Duration, Instant};

// ============================================================================
// Clocks
// ============================================================================

/// Monotonic millisecond time source.
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary, fixed origin.
    fn now_ms(&self) -> u64;
}

/// Wall-clock time measured from the moment the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self { Self::new() }
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self { Self { origin: Instant::now() } }
}

impl Clock for SystemClock {
    #[allow(clippy::cast_possible_truncation)] // u64 milliseconds outlive any session
    fn now_ms(&self) -> u64 { self.origin.elapsed().as_millis() as u64 }
}

/// A clock that only moves when advanced.
///
/// Clones share the same underlying time, so a test can keep one handle and
/// give another to the throttler.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Moves time forward by `delta`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get().saturating_add(delta.as_millis() as u64));
    }

    /// Jumps to an absolute time. Moving backwards is ignored.
    pub fn set_ms(&self, now_ms: u64) {
        if now_ms > self.now.get() {
            self.now.set(now_ms);
        }
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 { self.now.get() }
}

// ============================================================================
// Timers
// ============================================================================

/// Identifies one scheduled firing. Each call to `schedule` yields a new handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[must_use]
    pub const fn id(self) -> u64 { self.0 }
}

type Callback = Box<dyn FnOnce()>;

/// A timer waiting for its deadline.
struct PendingTimer {
    handle: TimerHandle,
    deadline_ms: u64,
    callback: Callback,
}

impl fmt::Debug for PendingTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingTimer")
            .field("handle", &self.handle)
            .field("deadline_ms", &self.deadline_ms)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TimeoutThrottler
// ============================================================================

/// Per-key trailing-edge debouncer.
///
/// # Type Parameters
///
/// * `K` - The event class key (e.g. `"resize"`)
/// * `C` - The clock used to compute deadlines
#[derive(Debug)]
pub struct TimeoutThrottler<K, C> {
    /// Pending timers, at most one per key.
    pending: HashMap<K, PendingTimer>,
    clock: C,
    next_handle: u64,
}

impl<K, C> TimeoutThrottler<K, C>
where
    K: Eq + Hash + Clone + fmt::Debug,
    C: Clock,
{
    /// Creates an empty throttler reading time from `clock`.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            pending: HashMap::new(),
            clock,
            next_handle: 0,
        }
    }

    /// Returns the clock driving this throttler.
    pub const fn clock(&self) -> &C { &self.clock }

    /// Schedules `callback` to run `delay` from now.
    ///
    /// Any timer already pending for `key` is cancelled first, so only the
    /// last call of a burst fires.
    pub fn schedule<F>(&mut self, key: K, delay: Duration, callback: F) -> TimerHandle
    where F: FnOnce() + 'static {
        #[allow(clippy::cast_possible_truncation)]
        let deadline_ms = self.clock.now_ms().saturating_add(delay.as_millis() as u64);

        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);

        let replaced = self.pending.insert(key.clone(), PendingTimer {
            handle,
            deadline_ms,
            callback: Box::new(callback),
        });

        if let Some(previous) = replaced {
            tracing::trace!(
                key = ?key,
                cancelled = previous.handle.id(),
                handle = handle.id(),
                "replaced pending timer"
            );
        }

        handle
    }

    /// Cancels the pending timer for `key`.
    ///
    /// Returns `true` if a timer was pending.
    pub fn cancel(&mut self, key: &K) -> bool { self.pending.remove(key).is_some() }

    /// Runs every timer whose deadline has passed.
    ///
    /// Each timer is removed from the pending map before its callback runs, so
    /// a callback that unwinds leaves nothing pending. Timers fire in deadline
    /// order. Returns the number of callbacks run.
    pub fn fire_due(&mut self) -> usize {
        let now = self.clock.now_ms();

        let mut due: Vec<(u64, TimerHandle, K)> = self
            .pending
            .iter()
            .filter(|(_, timer)| timer.deadline_ms <= now)
            .map(|(key, timer)| (timer.deadline_ms, timer.handle, key.clone()))
            .collect();
        due.sort_by_key(|(deadline, handle, _)| (*deadline, *handle));

        let mut fired = 0;
        for (_, _, key) in due {
            if let Some(timer) = self.pending.remove(&key) {
                tracing::trace!(key = ?key, handle = timer.handle.id(), "firing timer");
                (timer.callback)();
                fired += 1;
            }
        }

        fired
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.pending.values().map(|timer| timer.deadline_ms).min()
    }

    /// Handle of the timer pending for `key`.
    #[must_use]
    pub fn pending_handle(&self, key: &K) -> Option<TimerHandle> {
        self.pending.get(key).map(|timer| timer.handle)
    }

    /// Checks if a timer is pending for `key`.
    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool { self.pending.contains_key(key) }

    /// Gets the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize { self.pending.len() }

    /// Checks if there are no pending timers.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.pending.is_empty() }

    /// Drops every pending timer without running it.
    pub fn clear(&mut self) { self.pending.clear(); }
}
