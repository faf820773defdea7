#![forbid(unsafe_code)]

//! Single-slot auto-play timer.
//!
//! [`AutoPlayTimer`] holds at most one pending deadline. Arming always
//! replaces (and thereby cancels) whatever was pending, so a stale timer from
//! before a reset or speed change can never fire.
//!
//! # Invariants
//!
//! 1. At most one timer is pending.
//! 2. Tokens are never reused; a cancelled token never fires.
//! 3. [`fire_due`](AutoPlayTimer::fire_due) consumes the pending timer, so a
//!    deadline fires at most once.

use std::time::Duration;

/// Identity of one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    token: TimerToken,
    deadline: Duration,
}

/// Single pending timer keyed by a monotonic generation counter.
#[derive(Debug, Clone, Default)]
pub struct AutoPlayTimer {
    pending: Option<Pending>,
    next_token: u64,
}

impl AutoPlayTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a timer firing `delay` after `now`, cancelling any pending one.
    pub fn arm(&mut self, now: Duration, delay: Duration) -> TimerToken {
        if let Some(stale) = self.cancel() {
            tracing::trace!(token = stale.get(), "replacing pending timer");
        }
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(Pending {
            token,
            deadline: now + delay,
        });
        token
    }

    /// Cancel the pending timer, returning its token.
    pub fn cancel(&mut self) -> Option<TimerToken> {
        self.pending.take().map(|p| p.token)
    }

    /// Take the pending timer if its deadline has been reached.
    pub fn fire_due(&mut self, now: Duration) -> Option<TimerToken> {
        match self.pending {
            Some(p) if now >= p.deadline => {
                self.pending = None;
                Some(p.token)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.map(|p| p.deadline)
    }
}
