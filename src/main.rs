//! Headless autoplay demo (default binary).
//!
//! Fills a board, repeatedly picks the first hinted swap, drives the turn
//! state machine to settlement, and prints ASCII grid dumps with the
//! running score. Reshuffles when the board deadlocks; stops when the
//! countdown expires or the turn budget runs out.

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use match3_core::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_MIN_MATCH_SIZE};
use match3_core::{Board, CountdownTimer, Game, PieceType, ScoreCounter, TurnPhase};

/// Seconds charged against the countdown per played turn
const SECONDS_PER_TURN: f32 = 1.0;

/// Upper bound on FSM steps per turn; a settled cascade on any sane board
/// takes far fewer
const MAX_STEPS_PER_TURN: usize = 10_000;

#[derive(Parser, Debug)]
#[command(name = "match3-core", about = "Headless match-3 autoplay demo")]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: i32,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: i32,

    /// Minimum run length that counts as a match
    #[arg(long, default_value_t = DEFAULT_MIN_MATCH_SIZE)]
    min_match_size: usize,

    /// Number of distinct piece types in the palette
    #[arg(long, default_value_t = 5)]
    piece_types: usize,

    /// Seed for the deterministic random source
    #[arg(long, default_value_t = 42)]
    seed: u32,

    /// Number of swaps to autoplay
    #[arg(long, default_value_t = 20)]
    turns: u32,

    /// Countdown budget in seconds
    #[arg(long, default_value_t = 60.0)]
    time: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let palette: Vec<PieceType> = (0..args.piece_types as i32).map(PieceType).collect();

    let mut board = Board::new(
        args.width,
        args.height,
        args.min_match_size,
        &palette,
        args.seed,
    )?;
    board.random_fill_up()?;

    let mut game = Game::new();
    let mut score = ScoreCounter::new(args.min_match_size);
    let mut timer = CountdownTimer::new();
    timer.set_time(args.time);

    println!("initial board:\n{board}");

    for turn in 1..=args.turns {
        timer.advance(SECONDS_PER_TURN);
        if timer.is_expired() {
            println!("time is up after {} turns", turn - 1);
            break;
        }

        if !board.has_any_possible_match() {
            let reshuffle_seed = args.seed.wrapping_add(turn);
            println!("deadlock; reshuffling with seed {reshuffle_seed}");
            board.shuffle(reshuffle_seed);
            resolve_shuffle_matches(&mut board, &mut score)?;
            continue;
        }

        let hints = board.possible_matches();
        let Some(hint) = hints.first() else {
            bail!("hint scanner found a match but listed none");
        };
        let (a, b) = hint.swapped();
        let (ax, ay) = (a.x(), a.y());
        let (bx, by) = (b.x(), b.y());

        board.select_at(ax, ay)?;
        board.select_at(bx, by)?;
        settle(&mut game, &mut board, &mut score)?;

        println!(
            "turn {turn}: swapped ({ax},{ay})<->({bx},{by})  score {}  multiplier {}  {:.0}s left",
            score.total_score(),
            score.total_multiplier(),
            timer.remaining(),
        );
        println!("{board}");
    }

    println!(
        "final score {} (multiplier {})",
        score.total_score(),
        score.total_multiplier()
    );
    Ok(())
}

/// Step the FSM until the board settles back to player control, feeding
/// every raised event through the score counter
fn settle(game: &mut Game, board: &mut Board, score: &mut ScoreCounter) -> Result<()> {
    for _ in 0..MAX_STEPS_PER_TURN {
        let phase = game.step(board);
        for event in board.take_events() {
            score.on_event(&event);
        }
        if phase == TurnPhase::WaitingToSwap && board.is_ready_for_input() {
            return Ok(());
        }
    }
    bail!("turn failed to settle within {MAX_STEPS_PER_TURN} steps");
}

/// Resolve matches a reshuffle may have created. The turn FSM only leaves
/// `WaitingToSwap` for a player swap, so shuffle fallout is cascaded
/// directly: flag every cell, then remove and refill until nothing
/// matches.
fn resolve_shuffle_matches(board: &mut Board, score: &mut ScoreCounter) -> Result<()> {
    for y in 0..board.height() {
        for x in 0..board.width() {
            board.set_moved_piece_at(x, y)?;
        }
    }
    for _ in 0..MAX_STEPS_PER_TURN {
        let matches = board.matches_from_moved();
        if matches.is_empty() {
            board.confirm_moved_pieces();
            for event in board.take_events() {
                score.on_event(&event);
            }
            return Ok(());
        }
        board.remove_matches(&matches);
        board.move_pieces_down();
    }
    bail!("reshuffle fallout failed to settle within {MAX_STEPS_PER_TURN} steps");
}
