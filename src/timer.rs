//! Countdown clock
//!
//! The core never reads a wall clock; the host measures elapsed time and
//! feeds it in through [`CountdownTimer::advance`].

/// Depletion timer clamped at zero with a latching expiry flag
#[derive(Debug, Clone, Copy, Default)]
pub struct CountdownTimer {
    remaining: f32,
    expired: bool,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// True once the timer has ever reached zero; never resets
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn set_time(&mut self, seconds: f32) {
        self.remaining = seconds;
    }

    /// Subtract host-measured elapsed seconds, clamping at zero and
    /// latching `expired` the first time the remainder would go
    /// non-positive
    pub fn advance(&mut self, delta_seconds: f32) {
        self.remaining -= delta_seconds;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.expired = true;
        }
    }
}
