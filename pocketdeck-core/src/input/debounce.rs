//! Poll-count debouncing for digital inputs
//!
//! Mechanical switches bounce for a few milliseconds. Rather than timing
//! the bounce, a new level is accepted once it has been sampled on
//! `polls` consecutive polls.

/// Debouncer for one digital line
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    /// Accepted level
    stable: bool,
    /// Level waiting to be accepted
    candidate: bool,
    /// Consecutive polls the candidate has been seen
    count: u8,
    /// Required consecutive polls (at least 1)
    polls: u8,
}

impl Debouncer {
    /// Create a released debouncer requiring `polls` consecutive samples
    ///
    /// A value of zero is treated as one.
    pub fn new(polls: u8) -> Self {
        Self {
            stable: false,
            candidate: false,
            count: 0,
            polls: polls.max(1),
        }
    }

    /// Feed one sample; returns the accepted level
    pub fn update(&mut self, active: bool) -> bool {
        if active == self.stable {
            self.candidate = active;
            self.count = 0;
            return self.stable;
        }

        if active == self.candidate {
            self.count = self.count.saturating_add(1);
        } else {
            self.candidate = active;
            self.count = 1;
        }

        if self.count >= self.polls {
            self.stable = active;
            self.count = 0;
        }
        self.stable
    }

    /// Accepted level
    pub fn level(&self) -> bool {
        self.stable
    }
}

/// Convert a raw pin level to "active", honoring pull-up wiring
///
/// With a pull-up the switch shorts the pin to ground, so low means pressed.
pub fn is_active(level_high: bool, pull_up: bool) -> bool {
    if pull_up {
        !level_high
    } else {
        level_high
    }
}
