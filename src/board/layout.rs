//! The fixed standard starting layout and its index convention.
//!
//! Front ends use these mappings to pick a sensible default selection;
//! they describe the setup order of [`Board::new`](super::Board::new),
//! not the live occupancy of a board.

use super::{Piece, Square};

/// Standard back-rank file order
pub(crate) const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Piece index occupying `square` in the standard starting layout, or
/// `None` for squares that start empty. Not a general occupancy query.
#[must_use]
pub fn standard_piece_index(square: Square) -> Option<usize> {
    match square.rank() {
        0 => Some(square.file()),
        1 => Some(8 + square.file()),
        6 => Some(16 + square.file()),
        7 => Some(24 + square.file()),
        _ => None,
    }
}

/// Starting square of the piece at `index` in the standard setup order,
/// or `None` for out-of-range indices.
#[must_use]
pub fn standard_square_for_index(index: usize) -> Option<Square> {
    match index {
        0..=7 => Some(Square(0, index)),
        8..=15 => Some(Square(1, index - 8)),
        16..=23 => Some(Square(6, index - 16)),
        24..=31 => Some(Square(7, index - 24)),
        _ => None,
    }
}
