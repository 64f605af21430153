//! Check, checkmate, and stalemate detection tests.

use crate::board::{Board, BoardBuilder, Color, Piece, Square};

/// Union of legal moves over every piece of `side` is empty
fn no_legal_moves(board: &Board, side: Color) -> bool {
    (0..board.pieces().len()).all(|i| {
        board.pieces()[i].color != side || board.legal_moves(i).is_empty()
    })
}

#[test]
fn test_start_position_is_quiet() {
    let board = Board::new();
    assert!(!board.is_in_check(Color::White));
    assert!(!board.is_in_check(Color::Black));
    assert!(!board.is_checkmate(Color::White));
    assert!(!board.is_stalemate(Color::White));
}

#[test]
fn test_fools_mate() {
    // 1. f3 e5 2. g4 Qh4#
    let mut board = Board::new();
    board.commit_move(13, Square(1, 5), Square(2, 5)); // f2-f3
    board.commit_move(20, Square(6, 4), Square(4, 4)); // e7-e5
    board.commit_move(14, Square(1, 6), Square(3, 6)); // g2-g4
    board.commit_move(27, Square(7, 3), Square(3, 7)); // Qd8-h4#

    assert!(board.is_in_check(Color::White));
    assert!(no_legal_moves(&board, Color::White));
    assert!(board.is_checkmate(Color::White));
    assert!(!board.is_stalemate(Color::White));
    assert!(!board.is_checkmate(Color::Black));
}

#[test]
fn test_queen_stalemate() {
    // Black king cornered on h8, white queen on g6: no check, no moves
    let board = BoardBuilder::new()
        .piece(Square(7, 7), Color::Black, Piece::King)
        .moved_piece(Square(5, 6), Color::White, Piece::Queen)
        .piece(Square(5, 5), Color::White, Piece::King)
        .build();

    assert!(!board.is_in_check(Color::Black));
    assert!(no_legal_moves(&board, Color::Black));
    assert!(board.is_stalemate(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
    // White still has moves, so white is neither mated nor stalled
    assert!(!board.is_stalemate(Color::White));
}

#[test]
fn test_rook_check_is_not_mate() {
    let board = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(Square(7, 4), Color::Black, Piece::Rook)
        .piece(Square(7, 7), Color::Black, Piece::King)
        .build();

    assert!(board.is_in_check(Color::White));
    assert!(!board.is_checkmate(Color::White)); // king steps aside
    assert!(!board.is_stalemate(Color::White));
}

#[test]
fn test_back_rank_mate() {
    let board = BoardBuilder::new()
        .moved_piece(Square(0, 6), Color::White, Piece::King) // g1
        .moved_piece(Square(1, 5), Color::White, Piece::Pawn) // f2
        .moved_piece(Square(1, 6), Color::White, Piece::Pawn) // g2
        .moved_piece(Square(1, 7), Color::White, Piece::Pawn) // h2
        .moved_piece(Square(0, 0), Color::Black, Piece::Rook) // a1
        .piece(Square(7, 4), Color::Black, Piece::King)
        .build();

    assert!(board.is_in_check(Color::White));
    assert!(board.is_checkmate(Color::White));
}

#[test]
fn test_check_resolved_by_blocking() {
    let board = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .moved_piece(Square(1, 0), Color::White, Piece::Rook)
        .piece(Square(7, 4), Color::Black, Piece::Rook)
        .piece(Square(7, 7), Color::Black, Piece::King)
        .build();

    assert!(board.is_in_check(Color::White));
    // The rook can interpose on e2
    assert!(board.legal_moves(1).contains(Square(1, 4)));
    // But not wander off while the king is exposed
    assert!(!board.legal_moves(1).contains(Square(2, 0)));
    assert!(!board.is_checkmate(Color::White));
}

#[test]
fn test_missing_king_degrades_to_not_in_check() {
    let board = BoardBuilder::new()
        .piece(Square(3, 3), Color::White, Piece::Rook)
        .piece(Square(7, 4), Color::Black, Piece::King)
        .build();

    assert!(!board.is_in_check(Color::White));
    assert!(!board.is_checkmate(Color::White));
}
