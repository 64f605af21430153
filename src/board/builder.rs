//! Fluent builder for constructing positions.
//!
//! Allows scenario and test positions to be set up piece by piece
//! instead of replaying a game move by move.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .build();
//! assert_eq!(board.pieces().len(), 3);
//! ```

use super::layout::BACK_RANK;
use super::{Board, Color, EnPassant, Piece, Square};

/// A fluent builder for constructing `Board` positions.
///
/// Placement order defines the piece indices of the built board.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece, bool)>,
    en_passant_target: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            en_passant_target: None,
        }
    }

    /// Create a builder holding the standard starting position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            builder
                .pieces
                .push((Square(0, file), Color::White, piece, false));
        }
        for file in 0..8 {
            builder
                .pieces
                .push((Square(1, file), Color::White, Piece::Pawn, false));
        }
        for file in 0..8 {
            builder
                .pieces
                .push((Square(6, file), Color::Black, Piece::Pawn, false));
        }
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            builder
                .pieces
                .push((Square(7, file), Color::Black, piece, false));
        }
        builder
    }

    /// Place a piece that has not yet moved.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _, _)| *sq != square);
        self.pieces.push((square, color, piece, false));
        self
    }

    /// Place a piece with its has-moved flag already set; pawns placed
    /// this way lose the double step, kings and rooks lose castling.
    #[must_use]
    pub fn moved_piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _, _)| *sq != square);
        self.pieces.push((square, color, piece, true));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _, _)| *sq != square);
        self
    }

    /// Open the en-passant window on `target` (the square a pawn just
    /// passed over). The victim is resolved at build time from the pawn
    /// standing one rank beyond the target.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Close the en-passant window.
    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.en_passant_target = None;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (square, color, piece, has_moved) in self.pieces {
            let index = board.add_piece(piece, color, square);
            board.pieces[index].has_moved = has_moved;
        }

        if let Some(target) = self.en_passant_target {
            board.en_passant = resolve_victim(&board, target)
                .map(|victim| EnPassant { target, victim });
        }

        board
    }
}

/// The double-stepping pawn sits one rank past the passed-over square:
/// above it when white pushed, below it when black pushed.
fn resolve_victim(board: &Board, target: Square) -> Option<usize> {
    for (d_rank, color) in [(1, Color::White), (-1, Color::Black)] {
        if let Some(sq) = target.offset(d_rank, 0) {
            if let Some(index) = board.occupant(sq) {
                let piece = &board.pieces[index];
                if piece.kind == Piece::Pawn && piece.color == color {
                    return Some(index);
                }
            }
        }
    }
    None
}
