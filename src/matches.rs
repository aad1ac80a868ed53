//! Match module - immutable descriptions of same-typed runs
//!
//! A [`Match`] is a set of distinct pieces sharing one type that form a
//! contiguous run of at least the minimum size along one axis, or the union
//! of a qualifying horizontal and vertical run through one shared piece
//! (L/T/+ shapes). Equality is member-set equality: cascades can rediscover
//! the same run from several moved pieces, and those rediscoveries must
//! compare equal so [`MatchSet`] can de-duplicate them.

use crate::piece::Piece;
use crate::types::{PieceId, PieceType};

/// A connected run of same-typed pieces
#[derive(Debug, Clone)]
pub struct Match {
    piece_type: PieceType,
    /// Member pieces, kept sorted by id so equality is a plain slice compare
    pieces: Vec<Piece>,
}

impl Match {
    pub fn new(piece_type: PieceType) -> Self {
        Self {
            piece_type,
            pieces: Vec::new(),
        }
    }

    pub fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Add a piece, ignoring duplicates. Returns true if it was inserted.
    pub fn insert(&mut self, piece: Piece) -> bool {
        match self.pieces.binary_search_by_key(&piece.id(), |p| p.id()) {
            Ok(_) => false,
            Err(pos) => {
                self.pieces.insert(pos, piece);
                true
            }
        }
    }

    /// Merge the members of another match into this one
    pub fn union_with(&mut self, other: &Match) {
        for piece in &other.pieces {
            self.insert(*piece);
        }
    }

    pub fn contains(&self, id: PieceId) -> bool {
        self.pieces
            .binary_search_by_key(&id, |p| p.id())
            .is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }
}

/// Member-set equality: two matches covering the same pieces are the same
/// logical match regardless of discovery order.
impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.pieces.len() == other.pieces.len()
            && self
                .pieces
                .iter()
                .zip(other.pieces.iter())
                .all(|(a, b)| a.id() == b.id())
    }
}

impl Eq for Match {}

/// All matches found during one detection pass, de-duplicated
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchSet {
    matches: Vec<Match>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a match unless an equal one is already present.
    /// Returns true if it was inserted.
    pub fn insert(&mut self, m: Match) -> bool {
        if self.matches.contains(&m) {
            return false;
        }
        self.matches.push(m);
        true
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Total number of member pieces across all matches
    pub fn total_pieces(&self) -> usize {
        self.matches.iter().map(Match::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter()
    }
}

/// A match reachable through one adjacent swap, reported by the deadlock
/// scanner together with the two pieces that were tentatively swapped
#[derive(Debug, Clone)]
pub struct PossibleMatch {
    found: Match,
    /// The tentatively swapped pair, sorted by id for set-style equality
    swapped: [Piece; 2],
}

impl PossibleMatch {
    pub fn new(found: Match, a: Piece, b: Piece) -> Self {
        let swapped = if a.id() <= b.id() { [a, b] } else { [b, a] };
        Self { found, swapped }
    }

    pub fn found(&self) -> &Match {
        &self.found
    }

    pub fn piece_type(&self) -> PieceType {
        self.found.piece_type()
    }

    /// The two pieces whose swap produces the match, at their tentative
    /// (post-swap) positions
    pub fn swapped(&self) -> (&Piece, &Piece) {
        (&self.swapped[0], &self.swapped[1])
    }
}

impl PartialEq for PossibleMatch {
    fn eq(&self, other: &Self) -> bool {
        self.found == other.found
            && self.swapped[0].id() == other.swapped[0].id()
            && self.swapped[1].id() == other.swapped[1].id()
    }
}

impl Eq for PossibleMatch {}
