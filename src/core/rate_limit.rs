//! Sliding-window rate limiter for admin operations.
//!
//! Each key keeps the timestamps of its accepted calls inside the trailing
//! window. State lives in the limiter instance; nothing is global, and it
//! is only meaningful inside a single process.

use std::cell::Cell;
use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Millisecond time source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Hand-driven clock for tests and replays.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by.as_millis() as u64);
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Outcome of [`SlidingWindowLimiter::check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub success: bool,
    /// Calls still allowed in the current window.
    pub remaining: u32,
    /// Milliseconds until the oldest counted call leaves the window.
    pub reset_ms: u64,
}

pub struct SlidingWindowLimiter<C: Clock> {
    max: u32,
    window_ms: u64,
    clock: C,
    hits: HashMap<String, Vec<u64>>,
    checks_since_cleanup: u32,
    cleanup_every: u32,
}

impl<C: Clock> SlidingWindowLimiter<C> {
    pub fn new(max: u32, window: Duration, clock: C) -> Self {
        Self {
            max,
            window_ms: window.as_millis() as u64,
            clock,
            hits: HashMap::new(),
            checks_since_cleanup: 0,
            cleanup_every: 1000,
        }
    }

    /// How many checks between automatic [`cleanup`](Self::cleanup) runs.
    pub fn with_cleanup_every(mut self, checks: u32) -> Self {
        self.cleanup_every = checks.max(1);
        self
    }

    /// Count a call for `key` if the window still has room.
    pub fn check(&mut self, key: &str) -> RateLimitDecision {
        let now = self.clock.now_ms();

        self.checks_since_cleanup += 1;
        if self.checks_since_cleanup >= self.cleanup_every {
            self.cleanup();
        }

        let window_ms = self.window_ms;
        let stamps = self.hits.entry(key.to_string()).or_default();
        stamps.retain(|&t| t + window_ms > now);

        let success = (stamps.len() as u32) < self.max;
        if success {
            stamps.push(now);
        }

        let reset_ms = stamps
            .first()
            .map(|&oldest| (oldest + window_ms).saturating_sub(now))
            .unwrap_or(0);

        RateLimitDecision {
            success,
            remaining: self.max.saturating_sub(stamps.len() as u32),
            reset_ms,
        }
    }

    /// Drop expired timestamps and keys left with none.
    pub fn cleanup(&mut self) {
        let now = self.clock.now_ms();
        let window_ms = self.window_ms;
        self.hits.retain(|_, stamps| {
            stamps.retain(|&t| t + window_ms > now);
            !stamps.is_empty()
        });
        self.checks_since_cleanup = 0;
    }

    /// Number of keys currently tracked.
    pub fn tracked_keys(&self) -> usize {
        self.hits.len()
    }
}
