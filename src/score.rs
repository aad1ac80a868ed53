//! Score accounting driven by board events
//!
//! [`ScoreCounter`] watches the event stream for resolved matches and keeps
//! a running score with a combo multiplier. The multiplier accumulates for
//! the counter's whole lifetime: every match larger than the minimum size
//! permanently raises it, so sustained chains of oversized matches score
//! increasingly.

use tracing::debug;

use crate::events::BoardEvent;

/// Payload reported after each score change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub total_score: u64,
    pub total_multiplier: u64,
}

/// Running score derived purely from match-resolution events
#[derive(Debug, Clone)]
pub struct ScoreCounter {
    total_score: u64,
    total_multiplier: u64,
    min_match_size: usize,
}

impl ScoreCounter {
    pub fn new(min_match_size: usize) -> Self {
        Self {
            total_score: 0,
            total_multiplier: 0,
            min_match_size,
        }
    }

    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    pub fn total_multiplier(&self) -> u64 {
        self.total_multiplier
    }

    /// Feed one board event. Resolved matches of size `s` first grow the
    /// multiplier by `s - min_match_size`, then add `s * multiplier` to the
    /// score; exactly-minimum matches leave the multiplier unchanged.
    /// Returns the new totals when the event was a resolved match.
    pub fn on_event(&mut self, event: &BoardEvent) -> Option<ScoreUpdate> {
        let BoardEvent::MatchResolved(m) = event else {
            return None;
        };

        let size = m.len() as u64;
        self.total_multiplier += size - self.min_match_size as u64;
        self.total_score += size * self.total_multiplier;

        debug!(
            size,
            score = self.total_score,
            multiplier = self.total_multiplier,
            "score updated"
        );
        Some(ScoreUpdate {
            total_score: self.total_score,
            total_multiplier: self.total_multiplier,
        })
    }
}
