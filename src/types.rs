//! Core types shared across the engine
//! This module contains pure data types plus the engine error enum

use std::fmt;

use derive_more::{Display, Error};

/// Default board dimensions (classic 8x8 layout)
pub const DEFAULT_BOARD_WIDTH: i32 = 8;
pub const DEFAULT_BOARD_HEIGHT: i32 = 8;

/// Default minimum run length for a match
pub const DEFAULT_MIN_MATCH_SIZE: usize = 3;

/// Smallest palette that still allows a match-free random fill.
/// With two types, excluding one per axis can leave zero candidates.
pub const MIN_PIECE_TYPES: usize = 3;

/// Comparable category tag of a board piece.
///
/// The tag is opaque to the engine; only equality matters. A reserved
/// sentinel value ([`PieceType::NONE`]) denotes "no piece" and never matches
/// anything, including itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceType(pub i32);

impl PieceType {
    /// Reserved sentinel meaning "no piece".
    pub const NONE: PieceType = PieceType(i32::MIN);

    /// Check whether this is the "no piece" sentinel
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "N")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Board-assigned piece identity.
///
/// Identity survives relocation, so "same piece" assertions go through ids,
/// never through grid positions or addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

/// Lifecycle state of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceState {
    /// Settled on the grid and eligible for match detection
    ReadyForMatch,
    /// Mid-swap; excluded from matching until the swap completes
    UnderSwap,
    /// Mid-fall during gravity compaction
    Falling,
    /// Taken off the grid. Terminal: a removed piece is never reused.
    Removed,
}

/// Errors raised by board construction and grid access
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Invalid board configuration, detected fail-fast at construction
    #[display("invalid board configuration: {reason}")]
    Configuration { reason: &'static str },

    /// Grid access outside `[0, width) x [0, height)`
    #[display("coordinates ({x}, {y}) are outside the board")]
    OutOfBounds { x: i32, y: i32 },

    /// The no-pre-match fill rule excluded every palette type for a cell.
    /// Only reachable with degenerate configurations (tiny palette together
    /// with `min_match_size < 3`).
    #[display("no fill candidates left for cell ({x}, {y})")]
    NoFillCandidates { x: i32, y: i32 },
}
