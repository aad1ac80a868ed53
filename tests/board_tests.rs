//! Board tests - grid placement, swap, gravity, fill, shuffle, deadlock scan

use match3_core::{Board, BoardError, BoardEvent, PieceType};

const PALETTE: [PieceType; 3] = [PieceType(0), PieceType(1), PieceType(2)];

fn board() -> Board {
    Board::new(8, 8, 3, &PALETTE, 2).unwrap()
}

#[test]
fn test_board_new_empty() {
    let board = board();
    assert_eq!(board.width(), 8);
    assert_eq!(board.height(), 8);

    for y in 0..8 {
        for x in 0..8 {
            assert!(board.piece_at(x, y).unwrap().is_none());
        }
    }
    assert!(!board.there_are_moved_pieces());
    assert!(!board.there_are_removed_pieces());
}

#[test]
fn test_board_out_of_bounds() {
    let board = board();
    assert_eq!(
        board.piece_at(-1, 0).unwrap_err(),
        BoardError::OutOfBounds { x: -1, y: 0 }
    );
    assert!(board.piece_at(8, 0).is_err());
    assert!(board.piece_at(0, 8).is_err());
}

#[test]
fn test_fill_with_installs_pieces_everywhere() {
    let mut board = board();
    board.fill_with(PieceType(1));

    for y in 0..8 {
        for x in 0..8 {
            let piece = board.piece_at(x, y).unwrap().unwrap();
            assert_eq!(piece.piece_type(), PieceType(1));
            assert_eq!((piece.x(), piece.y()), (x, y));
        }
    }
}

#[test]
fn test_random_fill_up_yields_no_matches() {
    // No-pre-match property over a sample of seeds.
    for seed in 0..50 {
        let mut board = Board::new(8, 8, 3, &PALETTE, seed).unwrap();
        board.random_fill_up().unwrap();

        for y in 0..8 {
            for x in 0..8 {
                let piece = board.piece_at(x, y).unwrap().unwrap();
                assert!(!piece.piece_type().is_none());
                board.set_moved_piece_at(x, y).unwrap();
            }
        }
        assert!(
            !board.there_are_matches(),
            "seed {seed} produced a pre-existing match:\n{board}"
        );
    }
}

#[test]
fn test_random_fill_up_with_minimum_match_size_two() {
    // The degenerate-but-legal configuration: both exclusion rules can fire
    // for different types, but three types always leave a candidate.
    let mut board = Board::new(8, 8, 2, &PALETTE, 7).unwrap();
    board.random_fill_up().unwrap();

    for y in 0..8 {
        for x in 0..8 {
            board.set_moved_piece_at(x, y).unwrap();
        }
    }
    assert!(!board.there_are_matches());
}

#[test]
fn test_selection_rejects_distant_cells() {
    let mut board = board();
    board.fill_with(PieceType::NONE);

    board.select_at(0, 0).unwrap();
    board.select_at(2, 0).unwrap();
    assert_eq!(board.selected(), Some((2, 0)));
    assert_eq!(board.swap_candidate(), None);
    assert!(!board.is_ready_to_swap());

    board.select_at(3, 1).unwrap();
    assert_eq!(board.selected(), Some((3, 1)));
    assert!(!board.is_ready_to_swap());
}

#[test]
fn test_failed_selection_leaves_board_unchanged() {
    let mut board = board();
    board.fill_with(PieceType::NONE);
    board.set_piece_at(PieceType(0), 0, 0).unwrap();
    board.set_piece_at(PieceType(1), 1, 1).unwrap();

    board.select_at(0, 0).unwrap();
    board.select_at(1, 1).unwrap();

    assert_eq!(board.swap_candidate(), None);
    assert!(!board.is_ready_to_swap());
    assert!(!board.swap_candidates());
    assert_eq!(
        board.piece_at(0, 0).unwrap().unwrap().piece_type(),
        PieceType(0)
    );
    assert_eq!(
        board.piece_at(1, 1).unwrap().unwrap().piece_type(),
        PieceType(1)
    );
}

#[test]
fn test_swap_exchanges_positions_and_flags_moved() {
    let mut board = board();
    board.fill_with(PieceType::NONE);
    let a = board.set_piece_at(PieceType(0), 2, 2).unwrap();
    let b = board.set_piece_at(PieceType(1), 3, 2).unwrap();

    board.select_at(2, 2).unwrap();
    board.select_at(3, 2).unwrap();
    assert!(board.is_ready_to_swap());
    assert!(board.swap_candidates());

    assert!(board.is_swapping());
    assert!(board.there_are_moved_pieces());
    assert_eq!(board.piece_at(3, 2).unwrap().unwrap().id(), a);
    assert_eq!(board.piece_at(2, 2).unwrap().unwrap().id(), b);
}

#[test]
fn test_swap_back_restores_original_positions() {
    let mut board = board();
    board.fill_with(PieceType::NONE);
    let a = board.set_piece_at(PieceType(0), 4, 4).unwrap();
    let b = board.set_piece_at(PieceType(1), 4, 5).unwrap();

    board.select_at(4, 4).unwrap();
    board.select_at(4, 5).unwrap();
    assert!(board.swap_candidates());
    assert!(board.swap_candidates());

    assert!(!board.is_swapping());
    assert_eq!(board.piece_at(4, 4).unwrap().unwrap().id(), a);
    assert_eq!(board.piece_at(4, 5).unwrap().unwrap().id(), b);
    // A reverted attempt disarms the pair entirely.
    assert_eq!(board.selected(), None);
    assert_eq!(board.swap_candidate(), None);
    assert!(!board.swap_candidates());
}

#[test]
fn test_swap_events_report_both_directions() {
    let mut board = board();
    board.fill_with(PieceType::NONE);
    board.set_piece_at(PieceType(0), 0, 0).unwrap();
    board.set_piece_at(PieceType(1), 1, 0).unwrap();

    board.select_at(0, 0).unwrap();
    board.select_at(1, 0).unwrap();
    board.swap_candidates();
    board.swap_candidates();

    let events = board.take_events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], BoardEvent::Swapped { .. }));
    assert!(matches!(events[1], BoardEvent::SwappedBack { .. }));
    assert!(board.take_events().is_empty());
}

#[test]
fn test_remove_matches_clears_slots_and_queues_gaps() {
    let mut board = board();
    board.fill_with(PieceType::NONE);
    board.set_piece_at(PieceType(0), 0, 0).unwrap();
    board.set_piece_at(PieceType(0), 1, 0).unwrap();
    board.set_piece_at(PieceType(0), 2, 0).unwrap();
    board.set_moved_piece_at(1, 0).unwrap();

    let matches = board.matches_from_moved();
    assert_eq!(matches.len(), 1);
    board.remove_matches(&matches);

    assert!(board.piece_at(0, 0).unwrap().is_none());
    assert!(board.piece_at(1, 0).unwrap().is_none());
    assert!(board.piece_at(2, 0).unwrap().is_none());
    assert!(board.there_are_removed_pieces());

    let events = board.take_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, BoardEvent::MatchResolved(m) if m.len() == 3)));
}

#[test]
fn test_gravity_preserves_column_order_and_refills() {
    let mut board = board();
    board.random_fill_up().unwrap();

    // Pieces above the gap, in bottom-up order.
    let survivors: Vec<_> = (3..8)
        .map(|y| board.piece_at(5, y).unwrap().unwrap().id())
        .collect();

    board.remove_piece_at(5, 0).unwrap();
    board.remove_piece_at(5, 1).unwrap();
    board.remove_piece_at(5, 2).unwrap();
    board.move_pieces_down();

    // Full column again, survivors shifted down three rows in order.
    for (i, id) in survivors.iter().enumerate() {
        assert_eq!(board.piece_at(5, i as i32).unwrap().unwrap().id(), *id);
    }
    for y in 0..8 {
        assert!(board.piece_at(5, y).unwrap().is_some());
    }
    assert!(!board.there_are_removed_pieces());
}

#[test]
fn test_gravity_spawns_at_top_with_increasing_heights() {
    let mut board = board();
    board.fill_with(PieceType::NONE);
    board.remove_piece_at(0, 0).unwrap();
    board.remove_piece_at(0, 1).unwrap();
    board.remove_piece_at(0, 2).unwrap();
    board.take_events();
    board.move_pieces_down();

    let spawns: Vec<_> = board
        .take_events()
        .into_iter()
        .filter_map(|e| match e {
            BoardEvent::PieceSpawned {
                piece,
                spawn_height,
            } => Some((piece.x(), piece.y(), spawn_height)),
            _ => None,
        })
        .collect();

    assert_eq!(spawns, vec![(0, 5, 1), (0, 6, 2), (0, 7, 3)]);
}

#[test]
fn test_gravity_fills_every_column_completely() {
    let mut board = board();
    board.random_fill_up().unwrap();

    for x in 0..8 {
        board.remove_piece_at(x, 4).unwrap();
    }
    board.remove_piece_at(3, 0).unwrap();
    board.remove_piece_at(3, 7).unwrap();
    board.move_pieces_down();

    for y in 0..8 {
        for x in 0..8 {
            assert!(
                board.piece_at(x, y).unwrap().is_some(),
                "hole left at ({x}, {y})"
            );
        }
    }
}

#[test]
fn test_shuffle_preserves_piece_population() {
    let mut board = board();
    board.random_fill_up().unwrap();

    let mut before: Vec<_> = (0..8)
        .flat_map(|y| (0..8).map(move |x| (x, y)))
        .map(|(x, y)| board.piece_at(x, y).unwrap().unwrap().id())
        .collect();
    before.sort_unstable();

    board.shuffle(99);

    let mut after = Vec::new();
    for y in 0..8 {
        for x in 0..8 {
            let piece = board.piece_at(x, y).unwrap().unwrap();
            // Stored coordinates track the slot after shuffling.
            assert_eq!((piece.x(), piece.y()), (x, y));
            after.push(piece.id());
        }
    }
    after.sort_unstable();
    assert_eq!(before, after);
}

#[test]
fn test_deadlock_scan_finds_single_opportunity() {
    let mut board = board();
    board.fill_with(PieceType::NONE);
    board.set_piece_at(PieceType(0), 0, 0).unwrap();
    board.set_piece_at(PieceType(0), 1, 0).unwrap();
    board.set_piece_at(PieceType(0), 3, 0).unwrap();

    assert!(board.has_any_possible_match());
    let hints = board.possible_matches();
    assert_eq!(hints.len(), 1);
    assert_eq!(hints[0].found().len(), 3);
}

#[test]
fn test_deadlock_scan_reports_dead_board() {
    let mut board = board();
    board.fill_with(PieceType::NONE);
    board.set_piece_at(PieceType(0), 0, 0).unwrap();
    board.set_piece_at(PieceType(0), 3, 0).unwrap();
    board.set_piece_at(PieceType(0), 6, 0).unwrap();

    assert!(!board.has_any_possible_match());
    assert!(board.possible_matches().is_empty());
}

#[test]
fn test_deadlock_scan_leaves_board_unchanged() {
    let mut board = board();
    board.random_fill_up().unwrap();
    let before = board.to_string();

    board.possible_matches();

    assert_eq!(board.to_string(), before);
    assert!(!board.there_are_moved_pieces());
}

#[test]
fn test_is_ready_for_input_lifecycle() {
    let mut board = board();
    board.fill_with(PieceType::NONE);
    board.set_piece_at(PieceType(0), 0, 0).unwrap();
    board.set_piece_at(PieceType(1), 1, 0).unwrap();
    assert!(board.is_ready_for_input());

    board.select_at(0, 0).unwrap();
    board.select_at(1, 0).unwrap();
    board.swap_candidates();
    assert!(!board.is_ready_for_input());

    board.swap_candidates();
    board.confirm_moved_pieces();
    assert!(board.is_ready_for_input());
}

#[test]
fn test_display_dump_matches_grid() {
    let mut board = Board::new(4, 3, 3, &PALETTE, 0).unwrap();
    board.fill_with(PieceType::NONE);
    board.set_piece_at(PieceType(0), 0, 0).unwrap();
    board.set_piece_at(PieceType(1), 1, 1).unwrap();
    board.set_piece_at(PieceType(2), 3, 2).unwrap();

    assert_eq!(board.to_string(), "NNN2\nN1NN\n0NNN\n");
}
