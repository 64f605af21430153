//! Game status predicates: check, checkmate, stalemate.
//!
//! These are derived from the current board on demand; no status state
//! machine is retained between calls.

use super::{Board, Color};

impl Board {
    /// Whether `side`'s king is currently attacked.
    ///
    /// A missing king reports not-in-check rather than erroring.
    #[must_use]
    pub fn is_in_check(&self, side: Color) -> bool {
        let Some(king) = self.find_king(side) else {
            return false;
        };
        self.pieces[king]
            .square()
            .map_or(false, |sq| self.is_square_attacked(sq, side.opponent()))
    }

    /// In check with no legal move for any piece of `side`
    #[must_use]
    pub fn is_checkmate(&self, side: Color) -> bool {
        self.is_in_check(side) && !self.has_any_legal_move(side)
    }

    /// Not in check, but no legal move for any piece of `side`
    #[must_use]
    pub fn is_stalemate(&self, side: Color) -> bool {
        !self.is_in_check(side) && !self.has_any_legal_move(side)
    }

    fn has_any_legal_move(&self, side: Color) -> bool {
        (0..self.pieces.len()).any(|i| {
            let piece = &self.pieces[i];
            piece.color == side && !piece.is_captured() && !self.legal_moves(i).is_empty()
        })
    }
}
