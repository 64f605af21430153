//! Authoritative board state: the piece list and the en-passant window.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::layout::BACK_RANK;
use super::{Color, Piece, Square};

/// Opaque handle linking a piece to whatever the front end renders for it.
/// The rules engine never interprets it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderHandle(pub u64);

/// Where a piece currently is.
///
/// Captured pieces keep their slot in the piece list for the lifetime of
/// the game so that external index-based references stay stable; capture
/// is a state, not a removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Placement {
    /// On the board at the given square
    At(Square),
    /// Off the board, captured
    Captured,
}

impl Placement {
    /// The square if the piece is on the board
    #[inline]
    #[must_use]
    pub const fn square(self) -> Option<Square> {
        match self {
            Placement::At(sq) => Some(sq),
            Placement::Captured => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_captured(self) -> bool {
        matches!(self, Placement::Captured)
    }
}

/// One identity-stable entry in the piece list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardPiece {
    /// Piece kind; rewritten to `Queen` on promotion
    pub kind: Piece,
    pub color: Color,
    pub placement: Placement,
    /// Set once the piece has committed a move; gates castling and the
    /// pawn double step
    pub has_moved: bool,
    pub handle: RenderHandle,
}

impl BoardPiece {
    pub(crate) fn new(kind: Piece, color: Color, square: Square) -> Self {
        BoardPiece {
            kind,
            color,
            placement: Placement::At(square),
            has_moved: false,
            handle: RenderHandle::default(),
        }
    }

    /// The square if the piece is on the board
    #[inline]
    #[must_use]
    pub const fn square(&self) -> Option<Square> {
        self.placement.square()
    }

    #[inline]
    #[must_use]
    pub const fn is_captured(&self) -> bool {
        self.placement.is_captured()
    }
}

/// The single-ply en-passant window.
///
/// Set by a committed double pawn push, consumed by the very next
/// generation call, cleared again by every commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnPassant {
    /// The square the double-stepping pawn passed over
    pub target: Square,
    /// Index of the pawn that may be captured en passant
    pub victim: usize,
}

/// The board: an ordered piece list plus the en-passant window.
///
/// Insertion order is fixed at setup and never changes; all public move
/// queries and commands are keyed by index into this list. Out-of-range
/// indices yield empty results rather than panicking.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) pieces: Vec<BoardPiece>,
    pub(crate) en_passant: Option<EnPassant>,
}

impl Board {
    /// Standard 32-piece starting position.
    ///
    /// Insertion order: white back rank (indices 0-7, files a-h), white
    /// pawns (8-15), black pawns (16-23), black back rank (24-31).
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            board.add_piece(piece, Color::White, Square(0, file));
        }
        for file in 0..8 {
            board.add_piece(Piece::Pawn, Color::White, Square(1, file));
        }
        for file in 0..8 {
            board.add_piece(Piece::Pawn, Color::Black, Square(6, file));
        }
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            board.add_piece(piece, Color::Black, Square(7, file));
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: Vec::new(),
            en_passant: None,
        }
    }

    pub(crate) fn add_piece(&mut self, kind: Piece, color: Color, square: Square) -> usize {
        self.pieces.push(BoardPiece::new(kind, color, square));
        self.pieces.len() - 1
    }

    /// All pieces in insertion order, captured ones included
    #[must_use]
    pub fn pieces(&self) -> &[BoardPiece] {
        &self.pieces
    }

    /// The piece at `index`, or `None` when out of range
    #[must_use]
    pub fn piece(&self, index: usize) -> Option<&BoardPiece> {
        self.pieces.get(index)
    }

    /// The current en-passant window, if any
    #[must_use]
    pub const fn en_passant(&self) -> Option<EnPassant> {
        self.en_passant
    }

    /// Mark the piece at `index` captured. Out-of-range indices are
    /// ignored. No legality logic lives here.
    pub fn mark_captured(&mut self, index: usize) {
        if let Some(piece) = self.pieces.get_mut(index) {
            piece.placement = Placement::Captured;
        }
    }

    /// Index of the on-board piece occupying `square`, if any
    #[must_use]
    pub fn occupant(&self, square: Square) -> Option<usize> {
        self.pieces
            .iter()
            .position(|p| p.square() == Some(square))
    }

    /// Color and kind of the piece on a square
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        self.occupant(square)
            .map(|i| (self.pieces[i].color, self.pieces[i].kind))
    }

    /// Get just the piece kind on a square (without color)
    #[must_use]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.piece_at(square).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|(color, _)| color)
    }

    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant(square).is_none()
    }

    /// Index of `side`'s on-board king. `None` should not occur under
    /// normal play; callers degrade rather than error when it does.
    #[must_use]
    pub fn find_king(&self, side: Color) -> Option<usize> {
        self.pieces
            .iter()
            .position(|p| p.kind == Piece::King && p.color == side && !p.is_captured())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
