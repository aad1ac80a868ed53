//! Deterministic match-3 puzzle-grid engine.
//!
//! The crate owns a rectangular grid of typed pieces and everything that
//! happens on it: selection and swap validation, run detection, cascading
//! removal, gravity with refill, a no-pre-match random fill, reshuffling,
//! and a brute-force deadlock scanner. A cooperative turn state machine
//! ([`Game`]) sequences one swap-to-settled cycle per player move, and two
//! small satellites derive score ([`ScoreCounter`]) and track time
//! ([`CountdownTimer`]) without the core ever touching a wall clock or a
//! renderer.
//!
//! Everything is single-threaded, synchronous, and deterministic given a
//! seed. Hosts poll board state, drive [`Game::step`], and drain
//! [`BoardEvent`]s for anything they want to present.
//!
//! ```
//! use match3_core::{Board, Game, PieceType, TurnPhase};
//!
//! let palette = [PieceType(0), PieceType(1), PieceType(2)];
//! let mut board = Board::new(8, 8, 3, &palette, 42).unwrap();
//! board.random_fill_up().unwrap();
//!
//! let mut game = Game::new();
//! assert_eq!(game.step(&mut board), TurnPhase::WaitingToSwap);
//! assert!(board.is_ready_for_input());
//! ```

pub mod board;
pub mod events;
pub mod game;
pub mod matches;
pub mod piece;
pub mod rng;
pub mod score;
pub mod timer;
pub mod types;

pub use board::Board;
pub use events::BoardEvent;
pub use game::{Game, TurnPhase};
pub use matches::{Match, MatchSet, PossibleMatch};
pub use piece::Piece;
pub use rng::SimpleRng;
pub use score::{ScoreCounter, ScoreUpdate};
pub use timer::CountdownTimer;
pub use types::{BoardError, PieceId, PieceState, PieceType};
