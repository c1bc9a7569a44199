//! Time source and timer queue for every delayed step on the page.
//!
//! Nothing here sleeps. Components ask for a callback `delay` from now, and the page calls
//! [`TimerQueue::pop_due`] on each tick with the current [`Clock`] reading.

use std::{
    cell::Cell,
    time::{
        Duration,
        Instant,
    },
};

pub trait Clock {
    /// Time elapsed since the clock was created.
    fn now(&self) -> Duration;
}

pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Clock that only moves when told to. Used to drive animations step by step in tests.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

struct Timer<E> {
    due: Duration,
    seq: u64,
    event: E,
}

/// Pending timers ordered by deadline. Timers sharing a deadline fire in the order they
/// were scheduled.
pub struct TimerQueue<E> {
    timers: Vec<Timer<E>>,
    next_seq: u64,
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self { timers: Vec::new(), next_seq: 0 }
    }

    pub fn schedule_at(&mut self, due: Duration, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let index = self.timers.partition_point(|t| (t.due, t.seq) <= (due, seq));
        self.timers.insert(index, Timer { due, seq, event });
    }

    pub fn schedule(&mut self, now: Duration, delay: Duration, event: E) {
        self.schedule_at(now + delay, event);
    }

    /// Removes and returns the earliest timer if it is due at `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, E)> {
        if self.timers.first().is_some_and(|t| t.due <= now) {
            let timer = self.timers.remove(0);
            Some((timer.due, timer.event))
        } else {
            None
        }
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.first().map(|t| t.due)
    }

    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&E) -> bool) {
        self.timers.retain(|t| !predicate(&t.event));
    }

    pub fn contains(&self, mut predicate: impl FnMut(&E) -> bool) -> bool {
        self.timers.iter().any(|t| predicate(&t.event))
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}
