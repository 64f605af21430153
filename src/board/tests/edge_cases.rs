//! Pins, degraded inputs, and board invariants.

use crate::board::{Board, BoardBuilder, Color, Piece, Placement, Square};

#[test]
fn test_pinned_rook_stays_on_the_pin_line() {
    let board = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .moved_piece(Square(1, 4), Color::White, Piece::Rook)
        .piece(Square(7, 4), Color::Black, Piece::Rook)
        .piece(Square(7, 7), Color::Black, Piece::King)
        .build();
    const ROOK: usize = 1;

    let moves = board.legal_moves(ROOK);
    // May slide up the e-file, all the way to capturing the pinner
    assert!(moves.contains(Square(2, 4)));
    assert!(moves.contains(Square(7, 4)));
    // May not leave the file
    assert!(!moves.contains(Square(1, 0)));
    assert!(!moves.contains(Square(1, 7)));
    // The sideways moves are still pseudo-legal; only the filter rejects them
    assert!(board.pseudo_legal_moves(ROOK).contains(Square(1, 0)));
}

#[test]
fn test_pinned_bishop_cannot_move_at_all() {
    let board = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .moved_piece(Square(1, 4), Color::White, Piece::Bishop)
        .piece(Square(7, 4), Color::Black, Piece::Rook)
        .piece(Square(7, 7), Color::Black, Piece::King)
        .build();
    assert!(board.legal_moves(1).is_empty());
}

#[test]
fn test_king_cannot_step_into_attack() {
    let board = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(Square(7, 3), Color::Black, Piece::Rook)
        .piece(Square(7, 7), Color::Black, Piece::King)
        .build();
    let moves = board.legal_moves(0);
    assert!(!moves.contains(Square(0, 3)));
    assert!(!moves.contains(Square(1, 3)));
    assert!(moves.contains(Square(0, 5)));
}

#[test]
fn test_en_passant_capture_rejected_when_it_exposes_king() {
    // Both pawns vanish from the fifth rank, opening the rook's line
    let board = BoardBuilder::new()
        .moved_piece(Square(4, 7), Color::White, Piece::King) // h5
        .moved_piece(Square(4, 4), Color::White, Piece::Pawn) // e5
        .moved_piece(Square(4, 3), Color::Black, Piece::Pawn) // d5, just double-stepped
        .moved_piece(Square(4, 0), Color::Black, Piece::Rook) // a5
        .piece(Square(7, 4), Color::Black, Piece::King)
        .en_passant(Square(5, 3))
        .build();
    const PAWN: usize = 1;

    assert!(board.pseudo_legal_moves(PAWN).contains(Square(5, 3)));
    assert!(!board.legal_moves(PAWN).contains(Square(5, 3)));
}

#[test]
fn test_would_be_legal_rejects_non_pseudo_moves() {
    let board = Board::new();
    // A rook cannot hop the pawn wall no matter how safe the king is
    assert!(!board.would_be_legal_move(0, Square(0, 0), Square(4, 0)));
    // Out-of-range mover
    assert!(!board.would_be_legal_move(99, Square(0, 0), Square(4, 0)));
}

#[test]
fn test_simulation_leaves_live_board_untouched() {
    let board = Board::new();
    let before = board.pieces().to_vec();
    let _ = board.would_be_legal_move(12, Square(1, 4), Square(3, 4));
    let _ = board.legal_moves(1);
    assert_eq!(board.pieces(), &before[..]);
    assert!(board.en_passant().is_none());
}

#[test]
fn test_can_commit_move_enforces_side_to_move() {
    let board = Board::new();
    assert!(board.can_commit_move(12, Square(1, 4), Square(3, 4), Color::White));
    assert!(!board.can_commit_move(12, Square(1, 4), Square(3, 4), Color::Black));
    assert!(!board.can_commit_move(99, Square(1, 4), Square(3, 4), Color::White));
}

#[test]
fn test_commit_with_out_of_range_index_is_a_no_op() {
    let mut board = Board::new();
    let before = board.pieces().to_vec();
    board.commit_move(99, Square(1, 4), Square(3, 4));
    assert_eq!(board.pieces(), &before[..]);
}

#[test]
fn test_capture_keeps_piece_list_stable() {
    // 1. e4 d5 2. exd5
    let mut board = Board::new();
    board.commit_move(12, Square(1, 4), Square(3, 4));
    board.commit_move(19, Square(6, 3), Square(4, 3));
    assert!(board.can_commit_move(12, Square(3, 4), Square(4, 3), Color::White));
    board.commit_move(12, Square(3, 4), Square(4, 3));

    assert_eq!(board.pieces().len(), 32);
    assert_eq!(board.pieces()[19].placement, Placement::Captured);
    assert_eq!(board.occupant(Square(4, 3)), Some(12));
}

#[test]
fn test_single_occupancy_after_capture() {
    let mut board = Board::new();
    board.commit_move(12, Square(1, 4), Square(3, 4));
    board.commit_move(19, Square(6, 3), Square(4, 3));
    board.commit_move(12, Square(3, 4), Square(4, 3));

    let mut seen = std::collections::HashSet::new();
    for piece in board.pieces() {
        if let Some(sq) = piece.square() {
            assert!(seen.insert(sq), "two pieces on {sq}");
        }
    }
}

#[test]
fn test_attack_detector_sees_through_nothing() {
    // A rook does not attack through an interposed piece
    let board = BoardBuilder::new()
        .piece(Square(0, 0), Color::White, Piece::Rook)
        .piece(Square(0, 3), Color::White, Piece::Knight)
        .build();
    assert!(board.is_square_attacked(Square(0, 2), Color::White));
    assert!(board.is_square_attacked(Square(0, 3), Color::White));
    assert!(!board.is_square_attacked(Square(0, 5), Color::White));
}

#[test]
fn test_pawn_attacks_are_directional() {
    let board = BoardBuilder::new()
        .piece(Square(3, 3), Color::White, Piece::Pawn)
        .build();
    assert!(board.is_square_attacked(Square(4, 2), Color::White));
    assert!(board.is_square_attacked(Square(4, 4), Color::White));
    // Not forward, not backward
    assert!(!board.is_square_attacked(Square(4, 3), Color::White));
    assert!(!board.is_square_attacked(Square(2, 2), Color::White));
}

#[test]
#[cfg(debug_assertions)]
fn test_debug_printer_smoke() {
    let mut board = Board::new();
    board.commit_move(12, Square(1, 4), Square(3, 4));
    board.print_board();
}
