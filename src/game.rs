//! Turn state machine
//!
//! [`Game`] sequences one full swap-to-settled cycle by repeatedly invoking
//! board operations. Each [`Game::step`] call advances exactly one
//! transition; the host drives it cooperatively, once per tick or in a
//! tight loop, until the phase returns to [`TurnPhase::WaitingToSwap`] with
//! no armed pair. There is no terminal phase.
//!
//! The loop guarantees that a failed swap reverts exactly once and that a
//! successful swap cascades through remove / fall / recheck until no
//! further matches remain. Termination follows from the finite grid: each
//! removal strictly shrinks the pieces eligible to re-match until gravity
//! produces a settled state.

use tracing::debug;

use crate::board::Board;
use crate::matches::MatchSet;

/// Phase of the turn cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Settled; waiting for the player to arm a swap pair
    WaitingToSwap,
    /// A swap or fall just happened; detection runs next
    CheckingMatches,
    /// The swap produced nothing; it must be reverted
    SwappingBack,
    /// Matches found; they get removed next
    RemovingMatchPieces,
    /// Gaps are pending; gravity and refill run next
    MovingDownPieces,
}

/// Cooperative driver over [`Board`]: the turn FSM plus the match set
/// found in the current cycle
#[derive(Debug, Default)]
pub struct Game {
    phase: TurnPhase,
    current_matches: MatchSet,
}

impl Default for TurnPhase {
    fn default() -> Self {
        TurnPhase::WaitingToSwap
    }
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Matches detected in the current cycle, pending removal
    pub fn current_matches(&self) -> &MatchSet {
        &self.current_matches
    }

    /// Advance the turn cycle by exactly one transition and return the
    /// phase entered.
    ///
    /// `WaitingToSwap` holds until the board has an armed, ready pair.
    /// `CheckingMatches` branches three ways: matches found commit any
    /// pending swap and proceed to removal; no matches mid-swap schedules
    /// the revert; no matches otherwise means the cascade has settled and
    /// control returns to the player.
    pub fn step(&mut self, board: &mut Board) -> TurnPhase {
        let next = match self.phase {
            TurnPhase::WaitingToSwap => {
                if board.is_ready_to_swap() {
                    board.swap_candidates();
                    TurnPhase::CheckingMatches
                } else {
                    TurnPhase::WaitingToSwap
                }
            }
            TurnPhase::CheckingMatches => {
                let matches = board.matches_from_moved();
                if matches.is_empty() {
                    if board.is_swapping() {
                        TurnPhase::SwappingBack
                    } else {
                        board.confirm_moved_pieces();
                        TurnPhase::WaitingToSwap
                    }
                } else {
                    if board.is_swapping() {
                        board.confirm_swapped_pieces();
                    }
                    self.current_matches = matches;
                    TurnPhase::RemovingMatchPieces
                }
            }
            TurnPhase::SwappingBack => {
                board.swap_candidates();
                board.confirm_moved_pieces();
                TurnPhase::WaitingToSwap
            }
            TurnPhase::RemovingMatchPieces => {
                let matches = std::mem::take(&mut self.current_matches);
                board.remove_matches(&matches);
                TurnPhase::MovingDownPieces
            }
            TurnPhase::MovingDownPieces => {
                board.move_pieces_down();
                TurnPhase::CheckingMatches
            }
        };

        if next != self.phase {
            debug!(from = ?self.phase, to = ?next, "turn phase transition");
        }
        self.phase = next;
        self.phase
    }
}
