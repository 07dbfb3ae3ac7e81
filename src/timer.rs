//! Clocks and cancellable timers for the single-threaded controllers
//!
//! Controllers never sleep. They record deadlines in a [`TimerSet`] and the
//! driver calls their `tick()` once the earliest deadline has passed.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock used by the terminal front end
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Clone, Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    /// Move to an absolute offset from the clock's origin
    pub fn set_elapsed(&self, elapsed: Duration) {
        self.offset.set(elapsed);
    }

    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }

    pub fn origin(&self) -> Instant {
        self.origin
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}

/// Pending one-shot timers keyed by kind
///
/// At most one timer per kind is pending. Scheduling a kind that is already
/// pending replaces the old deadline.
#[derive(Debug)]
pub struct TimerSet<K> {
    pending: Vec<(K, Instant)>,
}

impl<K: Copy + PartialEq> TimerSet<K> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub fn schedule(&mut self, kind: K, at: Instant) {
        self.cancel(kind);
        self.pending.push((kind, at));
    }

    pub fn cancel(&mut self, kind: K) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(pending, _)| *pending != kind);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, kind: K) -> bool {
        self.pending.iter().any(|(pending, _)| *pending == kind)
    }

    pub fn deadline(&self, kind: K) -> Option<Instant> {
        self.pending
            .iter()
            .find(|(pending, _)| *pending == kind)
            .map(|(_, at)| *at)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(_, at)| *at).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return the earliest timer whose deadline is at or before `now`
    pub fn pop_due(&mut self, now: Instant) -> Option<(K, Instant)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (_, at))| *at <= now)
            .min_by_key(|(_, (_, at))| *at)
            .map(|(index, _)| index)?;
        Some(self.pending.remove(index))
    }
}

impl<K: Copy + PartialEq> Default for TimerSet<K> {
    fn default() -> Self {
        Self::new()
    }
}
