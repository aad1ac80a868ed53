//! Board module - the puzzle grid and every operation on it
//!
//! The board owns a `width x height` grid of optional pieces stored in a
//! flat row-major array (`y * width + x`). Coordinates: `(x, y)` with x
//! ranging left to right and y ranging bottom (0) to top (height-1); refill
//! pieces spawn at the top of their column.
//!
//! Beyond placement the board owns selection and swap validation, match
//! detection, match removal, gravity compaction with refill, the
//! no-pre-match random fill, shuffling, and the brute-force deadlock
//! scanner. Mutations raise [`BoardEvent`]s that the host drains with
//! [`Board::take_events`].
//!
//! Every piece is identified by a board-assigned [`PieceId`]; the grid never
//! holds the same piece in two slots, and a piece's stored coordinates
//! always equal the coordinates of the slot holding it.

use std::fmt;

use arrayvec::ArrayVec;
use tracing::debug;

use crate::events::BoardEvent;
use crate::matches::{Match, MatchSet, PossibleMatch};
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::types::{BoardError, PieceId, PieceState, PieceType, MIN_PIECE_TYPES};

/// The puzzle grid
#[derive(Debug, Clone)]
pub struct Board {
    width: i32,
    height: i32,
    min_match_size: usize,
    piece_types: Vec<PieceType>,
    rng: SimpleRng,
    /// Flat array of slots, row-major order (y * width + x)
    cells: Vec<Option<Piece>>,
    /// Cell of the currently selected piece, if any
    selected: Option<(i32, i32)>,
    /// Cell of the swap candidate; always a 4-neighbor of `selected`
    swap_candidate: Option<(i32, i32)>,
    /// Cells whose pieces moved in the most recent swap or gravity step
    moved: Vec<(i32, i32)>,
    /// Orphaned pieces awaiting gravity compaction
    removed: Vec<Piece>,
    /// True between a swap and its commit or revert
    is_swapping: bool,
    next_piece_id: u32,
    events: Vec<BoardEvent>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails fast on invalid configuration: fewer than three distinct piece
    /// types (the no-pre-match fill rule needs at least three to always
    /// leave a candidate), duplicate types, the sentinel in the palette,
    /// non-positive dimensions, or a minimum match size below 2.
    pub fn new(
        width: i32,
        height: i32,
        min_match_size: usize,
        piece_types: &[PieceType],
        seed: u32,
    ) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::Configuration {
                reason: "board dimensions must be positive",
            });
        }
        if min_match_size < 2 {
            return Err(BoardError::Configuration {
                reason: "minimum match size must be at least 2",
            });
        }
        if piece_types.len() < MIN_PIECE_TYPES {
            return Err(BoardError::Configuration {
                reason: "at least 3 distinct piece types are required",
            });
        }
        if piece_types.iter().any(|t| t.is_none()) {
            return Err(BoardError::Configuration {
                reason: "the sentinel type cannot be part of the palette",
            });
        }
        let mut sorted = piece_types.to_vec();
        sorted.sort_unstable();
        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return Err(BoardError::Configuration {
                reason: "piece types must be distinct",
            });
        }

        Ok(Self {
            width,
            height,
            min_match_size,
            piece_types: piece_types.to_vec(),
            rng: SimpleRng::new(seed),
            cells: vec![None; (width * height) as usize],
            selected: None,
            swap_candidate: None,
            moved: Vec::new(),
            removed: Vec::new(),
            is_swapping: false,
            next_piece_id: 0,
            events: Vec::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn min_match_size(&self) -> usize {
        self.min_match_size
    }

    /// True between a swap and its commit or revert
    pub fn is_swapping(&self) -> bool {
        self.is_swapping
    }

    pub fn selected(&self) -> Option<(i32, i32)> {
        self.selected
    }

    pub fn swap_candidate(&self) -> Option<(i32, i32)> {
        self.swap_candidate
    }

    /// True iff no swap, removal, or fall is pending and nothing matches:
    /// the board is settled and control belongs to the player
    pub fn is_ready_for_input(&self) -> bool {
        !self.is_swapping
            && self.removed.is_empty()
            && self.moved.is_empty()
            && !self.there_are_matches()
    }

    pub fn there_are_moved_pieces(&self) -> bool {
        !self.moved.is_empty()
    }

    pub fn there_are_removed_pieces(&self) -> bool {
        !self.removed.is_empty()
    }

    /// True iff the current moved set yields at least one match
    pub fn there_are_matches(&self) -> bool {
        !self.matches_from_moved().is_empty()
    }

    /// Drain all notifications raised since the previous drain
    pub fn take_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Flat index for checked coordinates
    fn index(&self, x: i32, y: i32) -> Result<usize, BoardError> {
        if self.in_bounds(x, y) {
            Ok((y * self.width + x) as usize)
        } else {
            Err(BoardError::OutOfBounds { x, y })
        }
    }

    /// Flat index for coordinates already known to be in bounds
    fn raw_index(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    fn occupied(&self, x: i32, y: i32) -> Option<&Piece> {
        if self.in_bounds(x, y) {
            self.cells[self.raw_index(x, y)].as_ref()
        } else {
            None
        }
    }

    fn new_piece(&mut self, piece_type: PieceType, x: i32, y: i32) -> Piece {
        let id = PieceId(self.next_piece_id);
        self.next_piece_id = self.next_piece_id.wrapping_add(1);
        let mut piece = Piece::new(id, piece_type);
        piece.relocate(x, y);
        piece
    }

    fn reset_bookkeeping(&mut self) {
        self.selected = None;
        self.swap_candidate = None;
        self.moved.clear();
        self.removed.clear();
        self.is_swapping = false;
    }

    /// Get the piece at `(x, y)`, if any
    pub fn piece_at(&self, x: i32, y: i32) -> Result<Option<&Piece>, BoardError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx].as_ref())
    }

    /// Create a fresh piece of the given type and install it at `(x, y)`,
    /// overwriting any occupant. Returns the new piece's id.
    pub fn set_piece_at(
        &mut self,
        piece_type: PieceType,
        x: i32,
        y: i32,
    ) -> Result<PieceId, BoardError> {
        let idx = self.index(x, y)?;
        let piece = self.new_piece(piece_type, x, y);
        let id = piece.id();
        self.cells[idx] = Some(piece);
        Ok(id)
    }

    /// Remove the piece at `(x, y)` from the grid, latching it `Removed`
    /// and queueing the gap for the next gravity pass. Empty slots no-op.
    pub fn remove_piece_at(&mut self, x: i32, y: i32) -> Result<(), BoardError> {
        let idx = self.index(x, y)?;
        if let Some(mut piece) = self.cells[idx].take() {
            piece.enter_removed();
            self.removed.push(piece);
        }
        Ok(())
    }

    /// Flag the piece at `(x, y)` for the next match-detection pass
    pub fn set_moved_piece_at(&mut self, x: i32, y: i32) -> Result<(), BoardError> {
        self.index(x, y)?;
        if !self.moved.contains(&(x, y)) {
            self.moved.push((x, y));
        }
        Ok(())
    }

    /// Fill the whole grid with fresh pieces of one type, resetting all
    /// transient bookkeeping. The sentinel type is allowed here; a
    /// sentinel-filled board is the standard fixture for placing hand-built
    /// scenarios.
    pub fn fill_with(&mut self, piece_type: PieceType) {
        self.reset_bookkeeping();
        for y in 0..self.height {
            for x in 0..self.width {
                let piece = self.new_piece(piece_type, x, y);
                let idx = self.raw_index(x, y);
                self.cells[idx] = Some(piece);
            }
        }
    }

    /// Select the piece at `(x, y)`.
    ///
    /// The first selection arms the cell. A second selection on an
    /// orthogonal 4-neighbor (exactly one axis differs, by exactly 1) arms
    /// it as the swap candidate; anything else replaces the selection and
    /// drops any prior candidate.
    pub fn select_at(&mut self, x: i32, y: i32) -> Result<(), BoardError> {
        self.index(x, y)?;
        match self.selected {
            Some(sel) if sel != (x, y) && Self::are_neighbors(sel, (x, y)) => {
                self.swap_candidate = Some((x, y));
            }
            _ => {
                self.selected = Some((x, y));
                self.swap_candidate = None;
            }
        }
        Ok(())
    }

    /// Strict 4-neighbor test: exactly one axis differs, by exactly 1.
    /// Diagonals and collinear-but-distant cells are never neighbors.
    fn are_neighbors(a: (i32, i32), b: (i32, i32)) -> bool {
        let dx = (a.0 - b.0).abs();
        let dy = (a.1 - b.1).abs();
        (dx == 1 && dy == 0) || (dx == 0 && dy == 1)
    }

    /// True iff a selected/candidate pair is armed and both pieces are
    /// settled on the grid
    pub fn is_ready_to_swap(&self) -> bool {
        let (Some(sel), Some(cand)) = (self.selected, self.swap_candidate) else {
            return false;
        };
        let ready = |(x, y): (i32, i32)| {
            self.occupied(x, y)
                .map_or(false, |p| p.state() == PieceState::ReadyForMatch)
        };
        ready(sel) && ready(cand)
    }

    /// Exchange the selected and candidate cells.
    ///
    /// Flags both cells as moved (replacing prior moved bookkeeping) and
    /// toggles the swapping flag: the first call performs the swap and
    /// raises [`BoardEvent::Swapped`]; a second call before the commit
    /// reverts it, raises [`BoardEvent::SwappedBack`] and disarms the pair
    /// so a failed attempt cannot re-trigger. Returns false (and does
    /// nothing) without a ready pair.
    pub fn swap_candidates(&mut self) -> bool {
        if !self.is_ready_to_swap() {
            return false;
        }
        let (Some((ax, ay)), Some((bx, by))) = (self.selected, self.swap_candidate) else {
            return false;
        };
        let a_idx = self.raw_index(ax, ay);
        let b_idx = self.raw_index(bx, by);
        let (Some(mut a), Some(mut b)) = (self.cells[a_idx], self.cells[b_idx]) else {
            return false;
        };

        a.enter_swap();
        b.enter_swap();
        a.relocate(bx, by);
        b.relocate(ax, ay);
        // The exchange completes synchronously, so both pieces are settled
        // again by the time the next detection pass runs.
        a.enter_ready_for_match();
        b.enter_ready_for_match();
        self.cells[b_idx] = Some(a);
        self.cells[a_idx] = Some(b);

        self.moved.clear();
        self.moved.push((ax, ay));
        self.moved.push((bx, by));

        self.is_swapping = !self.is_swapping;
        if self.is_swapping {
            debug!(from = ?(ax, ay), to = ?(bx, by), "swapped candidates");
            self.events.push(BoardEvent::Swapped {
                selected: a,
                candidate: b,
            });
        } else {
            debug!(from = ?(bx, by), to = ?(ax, ay), "swapped candidates back");
            self.events.push(BoardEvent::SwappedBack {
                selected: a,
                candidate: b,
            });
            // The attempt is over; a reverted pair must not re-arm the loop.
            self.selected = None;
            self.swap_candidate = None;
        }
        true
    }

    /// Commit the pending swap: the pair stays where it is and the
    /// selection is disarmed
    pub fn confirm_swapped_pieces(&mut self) {
        self.selected = None;
        self.swap_candidate = None;
        self.is_swapping = false;
    }

    /// Clear the moved-piece bookkeeping once a cascade has settled
    pub fn confirm_moved_pieces(&mut self) {
        self.moved.clear();
    }

    /// Find the match containing the piece at `(x, y)`, if any.
    ///
    /// Scans outward in all four cardinal directions, building one
    /// horizontal run (left + origin + right) and one vertical run
    /// (down + origin + up). Each run qualifies independently against the
    /// minimum size; if both qualify they are unioned into a single L/T/+
    /// match. Returns `None` for empty or out-of-range cells and for runs
    /// below the minimum.
    pub fn match_at(&self, x: i32, y: i32) -> Option<Match> {
        let origin = *self.occupied(x, y)?;

        let mut horizontal = Match::new(origin.piece_type());
        horizontal.insert(origin);
        let mut vertical = horizontal.clone();

        let mut i = x - 1;
        while let Some(p) = self.occupied(i, y) {
            if !p.matches(&origin) {
                break;
            }
            horizontal.insert(*p);
            i -= 1;
        }
        let mut i = x + 1;
        while let Some(p) = self.occupied(i, y) {
            if !p.matches(&origin) {
                break;
            }
            horizontal.insert(*p);
            i += 1;
        }
        let mut j = y - 1;
        while let Some(p) = self.occupied(x, j) {
            if !p.matches(&origin) {
                break;
            }
            vertical.insert(*p);
            j -= 1;
        }
        let mut j = y + 1;
        while let Some(p) = self.occupied(x, j) {
            if !p.matches(&origin) {
                break;
            }
            vertical.insert(*p);
            j += 1;
        }

        let horizontal_hit = horizontal.len() >= self.min_match_size;
        let vertical_hit = vertical.len() >= self.min_match_size;
        if horizontal_hit && vertical_hit {
            horizontal.union_with(&vertical);
            Some(horizontal)
        } else if horizontal_hit {
            Some(horizontal)
        } else if vertical_hit {
            Some(vertical)
        } else {
            None
        }
    }

    /// Run match detection from every cell flagged as moved, de-duplicating
    /// runs rediscovered from several origins
    pub fn matches_from_moved(&self) -> MatchSet {
        let mut set = MatchSet::new();
        for &(x, y) in &self.moved {
            if let Some(m) = self.match_at(x, y) {
                set.insert(m);
            }
        }
        set
    }

    /// Remove every piece of every match from the grid, raising
    /// [`BoardEvent::MatchResolved`] per match. Slots that no longer hold
    /// the matched piece (overlapping matches) are skipped; an empty set is
    /// a no-op.
    pub fn remove_matches(&mut self, matches: &MatchSet) {
        for m in matches.iter() {
            for piece in m.iter() {
                let Ok(idx) = self.index(piece.x(), piece.y()) else {
                    continue;
                };
                if self.cells[idx].map_or(false, |p| p.id() == piece.id()) {
                    if let Some(mut orphan) = self.cells[idx].take() {
                        orphan.enter_removed();
                        self.removed.push(orphan);
                    }
                }
            }
            debug!(size = m.len(), piece_type = %m.piece_type(), "match resolved");
            self.events.push(BoardEvent::MatchResolved(m.clone()));
        }
    }

    /// Compact each column downward over the gaps left by removed pieces,
    /// preserving relative vertical order, then spawn fresh random pieces
    /// into the vacated top slots.
    ///
    /// Every fallen and spawned piece is flagged as moved for the next
    /// detection pass (replacing prior moved bookkeeping); every spawn
    /// raises [`BoardEvent::PieceSpawned`] with its notional spawn height
    /// above the final row. Clears the pending removed list.
    pub fn move_pieces_down(&mut self) {
        self.moved.clear();

        for x in 0..self.width {
            let mut empty = 0;
            for y in 0..self.height {
                let idx = self.raw_index(x, y);
                match self.cells[idx] {
                    None => empty += 1,
                    Some(mut piece) => {
                        if empty > 0 {
                            piece.enter_falling();
                            piece.relocate(x, y - empty);
                            piece.enter_ready_for_match();
                            let target = self.raw_index(x, y - empty);
                            self.cells[target] = Some(piece);
                            self.cells[idx] = None;
                            self.moved.push((x, y - empty));
                        }
                    }
                }
            }

            let gap = empty;
            let mut remaining = empty;
            while remaining > 0 {
                let draw = self.rng.next_range(self.piece_types.len() as u32) as usize;
                let piece_type = self.piece_types[draw];
                let y = self.height - remaining;
                let piece = self.new_piece(piece_type, x, y);
                let idx = self.raw_index(x, y);
                self.cells[idx] = Some(piece);
                remaining -= 1;

                let spawn_height = (gap - remaining) as u32;
                self.moved.push((x, y));
                self.events.push(BoardEvent::PieceSpawned {
                    piece,
                    spawn_height,
                });
            }
        }

        debug!(moved = self.moved.len(), "pieces moved down");
        self.removed.clear();
    }

    /// Seed the entire grid without creating any pre-existing match.
    ///
    /// Cells are filled bottom row first, left to right. For each cell the
    /// candidate set starts as the full palette; if the run of identical
    /// types immediately to the left already reaches `min_match_size - 1`,
    /// that type is excluded, and independently likewise for the run
    /// immediately below. One type is drawn uniformly from the survivors.
    /// Degenerate configurations that exclude every candidate fail loudly.
    pub fn random_fill_up(&mut self) -> Result<(), BoardError> {
        self.reset_bookkeeping();
        let pre_match = self.min_match_size - 1;

        for y in 0..self.height {
            for x in 0..self.width {
                // At most one type per axis can be excluded.
                let mut excluded: ArrayVec<PieceType, 2> = ArrayVec::new();

                if x as usize >= pre_match {
                    let run_type = self.type_at(x - 1, y);
                    let mut run = 1;
                    let mut i = x - 2;
                    while i >= 0 && self.type_at(i, y) == run_type {
                        run += 1;
                        i -= 1;
                    }
                    if run >= pre_match {
                        excluded.push(run_type);
                    }
                }

                if y as usize >= pre_match {
                    let run_type = self.type_at(x, y - 1);
                    let mut run = 1;
                    let mut j = y - 2;
                    while j >= 0 && self.type_at(x, j) == run_type {
                        run += 1;
                        j -= 1;
                    }
                    if run >= pre_match && !excluded.contains(&run_type) {
                        excluded.push(run_type);
                    }
                }

                let survivors: Vec<PieceType> = self
                    .piece_types
                    .iter()
                    .copied()
                    .filter(|t| !excluded.contains(t))
                    .collect();
                if survivors.is_empty() {
                    return Err(BoardError::NoFillCandidates { x, y });
                }

                let draw = self.rng.next_range(survivors.len() as u32) as usize;
                let piece = self.new_piece(survivors[draw], x, y);
                let idx = self.raw_index(x, y);
                self.cells[idx] = Some(piece);
            }
        }

        debug!(
            width = self.width,
            height = self.height,
            "board filled without pre-existing matches"
        );
        Ok(())
    }

    /// Type of the piece at in-bounds `(x, y)`, sentinel for empty slots
    fn type_at(&self, x: i32, y: i32) -> PieceType {
        self.cells[self.raw_index(x, y)]
            .map(|p| p.piece_type())
            .unwrap_or(PieceType::NONE)
    }

    /// Swap every cell with a uniformly random other cell using a freshly
    /// seeded generator. A reshuffle primitive: it may legitimately
    /// introduce matches and does not re-validate the no-match invariant.
    pub fn shuffle(&mut self, seed: u32) {
        let mut rng = SimpleRng::new(seed);
        let len = self.cells.len() as u32;
        for y in 0..self.height {
            for x in 0..self.width {
                let j = rng.next_range(len) as i32;
                let (jx, jy) = (j % self.width, j / self.width);
                self.swap_cells_raw(x, y, jx, jy);
            }
        }
        debug!(seed, "board shuffled");
    }

    /// Exchange two slots and fix both pieces' stored coordinates.
    /// No events, state changes, or bookkeeping.
    fn swap_cells_raw(&mut self, ax: i32, ay: i32, bx: i32, by: i32) {
        let a = self.raw_index(ax, ay);
        let b = self.raw_index(bx, by);
        self.cells.swap(a, b);
        if let Some(p) = self.cells[a].as_mut() {
            p.relocate(ax, ay);
        }
        if let Some(p) = self.cells[b].as_mut() {
            p.relocate(bx, by);
        }
    }

    /// Brute-force deadlock/hint scan.
    ///
    /// For every cell, tentatively swap with its left and its down neighbor
    /// (right/up are symmetric and would only duplicate results), run match
    /// detection from both swapped cells, record any hit with the swapped
    /// pair, and swap back. The board is unchanged on return; results are
    /// de-duplicated by match members and swapped pair.
    pub fn possible_matches(&mut self) -> Vec<PossibleMatch> {
        let mut found: Vec<PossibleMatch> = Vec::new();

        for y in 0..self.height {
            for x in 0..self.width {
                for (nx, ny) in [(x - 1, y), (x, y - 1)] {
                    if nx < 0 || ny < 0 {
                        continue;
                    }
                    let a = self.raw_index(x, y);
                    let b = self.raw_index(nx, ny);
                    if self.cells[a].is_none() || self.cells[b].is_none() {
                        continue;
                    }

                    self.swap_cells_raw(x, y, nx, ny);
                    for (cx, cy) in [(x, y), (nx, ny)] {
                        if let Some(m) = self.match_at(cx, cy) {
                            let (Some(p1), Some(p2)) = (self.cells[a], self.cells[b]) else {
                                continue;
                            };
                            let candidate = PossibleMatch::new(m, p1, p2);
                            if !found.contains(&candidate) {
                                found.push(candidate);
                            }
                        }
                    }
                    self.swap_cells_raw(x, y, nx, ny);
                }
            }
        }

        found
    }

    /// True iff at least one adjacent swap would produce a match
    pub fn has_any_possible_match(&mut self) -> bool {
        !self.possible_matches().is_empty()
    }
}

/// ASCII grid dump: one row per line, top row first; sentinel pieces and
/// empty slots render as `N`, everything else as the type's number
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                match self.cells[self.raw_index(x, y)] {
                    Some(piece) => write!(f, "{}", piece.piece_type())?,
                    None => write!(f, "N")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: [PieceType; 3] = [PieceType(0), PieceType(1), PieceType(2)];

    fn board() -> Board {
        Board::new(8, 8, 3, &PALETTE, 0).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = board();
        assert_eq!(board.width(), 8);
        assert_eq!(board.height(), 8);
        assert_eq!(board.min_match_size(), 3);
        for y in 0..8 {
            for x in 0..8 {
                assert!(board.piece_at(x, y).unwrap().is_none());
            }
        }
    }

    #[test]
    fn test_construction_rejects_small_palette() {
        let err = Board::new(8, 8, 3, &[PieceType(0), PieceType(1)], 0).unwrap_err();
        assert!(matches!(err, BoardError::Configuration { .. }));
    }

    #[test]
    fn test_construction_rejects_duplicate_types() {
        let err =
            Board::new(8, 8, 3, &[PieceType(0), PieceType(1), PieceType(0)], 0).unwrap_err();
        assert!(matches!(err, BoardError::Configuration { .. }));
    }

    #[test]
    fn test_construction_rejects_sentinel_in_palette() {
        let err = Board::new(
            8,
            8,
            3,
            &[PieceType(0), PieceType(1), PieceType::NONE],
            0,
        )
        .unwrap_err();
        assert!(matches!(err, BoardError::Configuration { .. }));
    }

    #[test]
    fn test_construction_rejects_bad_dimensions_and_min_size() {
        assert!(Board::new(0, 8, 3, &PALETTE, 0).is_err());
        assert!(Board::new(8, -1, 3, &PALETTE, 0).is_err());
        assert!(Board::new(8, 8, 1, &PALETTE, 0).is_err());
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut board = board();
        assert_eq!(
            board.piece_at(-1, 0).unwrap_err(),
            BoardError::OutOfBounds { x: -1, y: 0 }
        );
        assert!(board.piece_at(8, 0).is_err());
        assert!(board.set_piece_at(PieceType(0), 0, 8).is_err());
        assert!(board.remove_piece_at(0, -3).is_err());
        assert!(board.select_at(9, 9).is_err());
    }

    #[test]
    fn test_set_piece_updates_coordinates() {
        let mut board = board();
        let id = board.set_piece_at(PieceType(1), 5, 2).unwrap();
        let piece = board.piece_at(5, 2).unwrap().unwrap();
        assert_eq!(piece.id(), id);
        assert_eq!((piece.x(), piece.y()), (5, 2));
        assert_eq!(piece.piece_type(), PieceType(1));
    }

    #[test]
    fn test_selection_arms_neighbor_as_candidate() {
        let mut board = board();
        board.fill_with(PieceType::NONE);

        board.select_at(3, 3).unwrap();
        assert_eq!(board.selected(), Some((3, 3)));
        assert_eq!(board.swap_candidate(), None);

        board.select_at(3, 4).unwrap();
        assert_eq!(board.selected(), Some((3, 3)));
        assert_eq!(board.swap_candidate(), Some((3, 4)));
    }

    #[test]
    fn test_selection_replaces_on_non_neighbor() {
        let mut board = board();
        board.fill_with(PieceType::NONE);

        board.select_at(3, 3).unwrap();
        // Diagonal is not a neighbor even though both axes differ by 1.
        board.select_at(4, 4).unwrap();
        assert_eq!(board.selected(), Some((4, 4)));
        assert_eq!(board.swap_candidate(), None);

        // Collinear but two cells away is not a neighbor either.
        board.select_at(4, 6).unwrap();
        assert_eq!(board.selected(), Some((4, 6)));
        assert_eq!(board.swap_candidate(), None);
    }

    #[test]
    fn test_selection_replacement_drops_prior_candidate() {
        let mut board = board();
        board.fill_with(PieceType::NONE);

        board.select_at(3, 3).unwrap();
        board.select_at(3, 4).unwrap();
        assert!(board.swap_candidate().is_some());

        board.select_at(0, 0).unwrap();
        assert_eq!(board.selected(), Some((0, 0)));
        assert_eq!(board.swap_candidate(), None);
    }

    #[test]
    fn test_swap_without_pair_is_noop() {
        let mut board = board();
        board.fill_with(PieceType::NONE);
        assert!(!board.swap_candidates());

        board.select_at(0, 0).unwrap();
        assert!(!board.swap_candidates());
    }

    #[test]
    fn test_display_renders_top_row_first() {
        let mut board = Board::new(3, 2, 3, &PALETTE, 0).unwrap();
        board.fill_with(PieceType::NONE);
        board.set_piece_at(PieceType(0), 0, 0).unwrap();
        board.set_piece_at(PieceType(1), 2, 1).unwrap();

        assert_eq!(board.to_string(), "NN1\n0NN\n");
    }

    #[test]
    fn test_display_renders_empty_slot_as_sentinel() {
        let board = Board::new(2, 1, 3, &PALETTE, 0).unwrap();
        assert_eq!(board.to_string(), "NN\n");
    }
}
