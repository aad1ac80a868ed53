//! Piece module - a single grid cell's typed token
//!
//! A piece is created by the board, carries an immutable type tag and a
//! board-assigned identity, and mutates only its position and lifecycle
//! state. `Removed` is a latch: once a piece leaves the grid it never
//! transitions back.

use std::fmt;

use crate::types::{PieceId, PieceState, PieceType};

/// A typed token occupying one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    piece_type: PieceType,
    x: i32,
    y: i32,
    state: PieceState,
}

impl Piece {
    pub(crate) fn new(id: PieceId, piece_type: PieceType) -> Self {
        Self {
            id,
            piece_type,
            x: 0,
            y: 0,
            state: PieceState::ReadyForMatch,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn state(&self) -> PieceState {
        self.state
    }

    /// Check whether this piece is the "no piece" placeholder
    pub fn is_sentinel(&self) -> bool {
        self.piece_type.is_none()
    }

    /// Update the stored grid coordinates.
    /// The board installs the piece into the matching slot; the two must
    /// stay consistent.
    pub(crate) fn relocate(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Settle the piece and make it eligible for matching again.
    /// No-op on a removed piece.
    pub fn enter_ready_for_match(&mut self) {
        if self.state != PieceState::Removed {
            self.state = PieceState::ReadyForMatch;
        }
    }

    /// Mark the piece as participating in a swap.
    /// No-op unless the piece is currently settled.
    pub fn enter_swap(&mut self) {
        if self.state == PieceState::ReadyForMatch {
            self.state = PieceState::UnderSwap;
        }
    }

    /// Mark the piece as falling during gravity compaction.
    /// No-op on a removed piece.
    pub fn enter_falling(&mut self) {
        if self.state != PieceState::Removed {
            self.state = PieceState::Falling;
        }
    }

    /// Take the piece off the grid. The transition is terminal.
    pub fn enter_removed(&mut self) {
        self.state = PieceState::Removed;
    }

    /// Check whether two pieces are match-compatible: neither is the
    /// sentinel, both share one type, and both are settled. Pieces mid-swap
    /// or mid-fall are excluded to prevent false cascades.
    pub fn matches(&self, other: &Piece) -> bool {
        !self.piece_type.is_none()
            && !other.piece_type.is_none()
            && self.piece_type == other.piece_type
            && self.state == PieceState::ReadyForMatch
            && other.state == PieceState::ReadyForMatch
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[x={}, y={}, state={:?}, type={}]",
            self.x, self.y, self.state, self.piece_type
        )
    }
}
