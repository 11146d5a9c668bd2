//! Wall-clock bookkeeping for tick due-ness.

use std::cell::Cell;
use std::time::{Duration, Instant};

use crate::policy::FramePolicy;

/// Source of "now". The runner uses [`SystemClock`]; tests drive a [`ManualClock`].
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    pub fn elapsed(&self) -> Duration {
        self.offset.get()
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

/// Decides when the next tick is due.
///
/// Owns the game start time and the last tick time; the engine's rules never
/// see either, only the elapsed milliseconds passed into `tick`.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    policy: FramePolicy,
    started_at: Instant,
    last_tick_at: Option<Instant>,
}

impl FrameScheduler {
    pub fn new(policy: FramePolicy, started_at: Instant) -> Self {
        Self {
            policy,
            started_at,
            last_tick_at: None,
        }
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn last_tick_at(&self) -> Option<Instant> {
        self.last_tick_at
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Milliseconds since the game started, as fed to the engine.
    pub fn elapsed_ms(&self, now: Instant) -> u64 {
        self.elapsed(now).as_millis() as u64
    }

    pub fn current_interval(&self, now: Instant) -> Duration {
        self.policy.interval(self.elapsed(now))
    }

    /// The first tick is due immediately.
    pub fn is_due(&self, now: Instant) -> bool {
        self.time_until_due(now).is_zero()
    }

    pub fn time_until_due(&self, now: Instant) -> Duration {
        match self.next_due_at() {
            Some(deadline) => deadline.saturating_duration_since(now),
            None => Duration::ZERO,
        }
    }

    /// Earliest instant at which the time since the last tick reaches the
    /// interval in force at that instant.
    ///
    /// The interval may shrink while waiting, so the deadline is the smallest
    /// whole-millisecond gap `d` with `d >= interval(last + d)`. Intervals never
    /// grow with elapsed time, so that predicate is monotone in `d`.
    pub fn next_due_at(&self) -> Option<Instant> {
        let last = self.last_tick_at?;
        let reached = |d: u64| {
            let gap = Duration::from_millis(d);
            gap >= self.policy.interval(self.elapsed(last + gap))
        };

        let mut lo = 0u64;
        let mut hi = self.policy.interval(self.elapsed(last)).as_millis() as u64;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if reached(mid) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        Some(last + Duration::from_millis(hi))
    }

    pub fn mark_ticked(&mut self, now: Instant) {
        self.last_tick_at = Some(now);
    }
}
