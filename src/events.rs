//! Event module - notifications raised by board mutations
//!
//! The board records every notification synchronously into an internal
//! queue; the host drains the queue with [`crate::Board::take_events`] after
//! each operation (or each turn step) and forwards entries to whoever is
//! interested. The engine deliberately does not prescribe a delivery
//! mechanism beyond that: direct calls, channels, and queues are all host
//! choices.
//!
//! Payloads are plain copies of the pieces involved, taken at the moment the
//! event was raised; they are snapshots, not live references into the grid.

use crate::matches::Match;
use crate::piece::Piece;

/// A grid-state change notification
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    /// A fresh piece was spawned during gravity refill. `spawn_height` is
    /// the number of rows above its final row the piece notionally fell
    /// from, so a host can animate longer falls for deeper gaps.
    PieceSpawned { piece: Piece, spawn_height: u32 },

    /// A match was resolved and its pieces removed from the grid
    MatchResolved(Match),

    /// A selected/candidate pair exchanged cells
    Swapped { selected: Piece, candidate: Piece },

    /// A pair that produced no match was swapped back automatically
    SwappedBack { selected: Piece, candidate: Piece },
}
