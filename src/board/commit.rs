//! Move execution.
//!
//! Commits an already-validated move to the live board. No legality
//! logic lives here: callers must run the move through
//! [`Board::would_be_legal_move`] first, and an illegal commit leaves
//! the board inconsistent.

use super::{Board, EnPassant, Piece, Placement, Square};

impl Board {
    /// Commit the move of the piece at `mover` from `from` to `to`.
    ///
    /// Effects, in order: capture on the destination, castling rook
    /// relocation, en-passant victim capture, mover relocation and
    /// has-moved update, auto-promotion to queen on the farthest rank,
    /// and the en-passant window recompute. The window is cleared by
    /// every commit and set only by a double pawn push.
    ///
    /// Out-of-range `mover` indices are ignored.
    pub fn commit_move(&mut self, mover: usize, from: Square, to: Square) {
        let Some(piece) = self.piece(mover) else {
            return;
        };
        let side = piece.color;
        let kind = piece.kind;

        // 1. Capture whatever enemy piece occupies the destination
        if let Some(occupant) = self.occupant(to) {
            if occupant != mover && self.pieces[occupant].color != side {
                self.mark_captured(occupant);
            }
        }

        // 2. A two-file king step relocates the matching rook
        if kind == Piece::King && (to.file() as isize - from.file() as isize).unsigned_abs() == 2 {
            let (corner_file, rook_file) = if to.file() > from.file() { (7, 5) } else { (0, 3) };
            if let Some(rook) = self.castling_rook(side, Square(from.rank(), corner_file)) {
                self.pieces[rook].placement = Placement::At(Square(from.rank(), rook_file));
                self.pieces[rook].has_moved = true;
            }
        }

        // 3. En-passant capture: pawn onto the window target
        if kind == Piece::Pawn {
            if let Some(ep) = self.en_passant {
                if to == ep.target && self.piece(ep.victim).map_or(false, |v| v.color != side) {
                    self.mark_captured(ep.victim);
                }
            }
        }

        // 4. Move the mover
        self.pieces[mover].placement = Placement::At(to);
        self.pieces[mover].has_moved = true;

        // 5. Auto-promotion: a pawn on its farthest rank becomes a queen
        if kind == Piece::Pawn && to.rank() == side.pawn_promotion_rank() {
            self.pieces[mover].kind = Piece::Queen;
            #[cfg(feature = "logging")]
            log::debug!("pawn promoted to queen on {to}");
        }

        // 6. Recompute the window. The kind is re-read so a pawn that
        // just promoted no longer counts as one.
        self.en_passant = None;
        if self.pieces[mover].kind == Piece::Pawn
            && (to.rank() as isize - from.rank() as isize).unsigned_abs() == 2
        {
            let passed_over = Square((from.rank() + to.rank()) / 2, from.file());
            self.en_passant = Some(EnPassant {
                target: passed_over,
                victim: mover,
            });
        }

        #[cfg(feature = "logging")]
        log::debug!("committed {side} move {from}->{to}");
    }
}
