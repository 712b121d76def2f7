//! Keystroke debouncing and response ordering for incremental search.

use std::time::{Duration, Instant};

/// Quiet period between the last keystroke and the request it triggers.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Tracks the quiet period after the most recent keystroke.
///
/// Callers pass instants explicitly, so the live loop can drive the timer
/// from the real clock while tests use synthetic instants and never sleep.
#[derive(Debug, Default)]
pub struct Debouncer {
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Record input at `now`, restarting the quiet period.
    pub fn input_at(&mut self, now: Instant) {
        self.deadline = Some(now + DEBOUNCE);
    }

    /// Drop any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the deadline, if one is armed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consume the deadline if the quiet period has elapsed by `now`.
    pub fn fire_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Token stamped onto one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Orders overlapping requests so only the newest response lands.
///
/// Each issued request gets a fresh generation. A response is applied only
/// while its generation is still the latest, so a slow reply for an old
/// query can never overwrite results for a newer one.
#[derive(Debug, Default)]
pub struct SearchSession {
    current: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a new request, superseding everything already in flight.
    pub fn issue(&mut self) -> Generation {
        self.current += 1;
        Generation(self.current)
    }

    /// Whether `token` still identifies the newest request.
    pub fn is_current(&self, token: Generation) -> bool {
        token.0 == self.current
    }

    /// Supersede all in-flight requests without issuing a new one.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }
}
