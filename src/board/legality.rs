//! Legality filtering: simulate a candidate move on a private copy of
//! the board and reject it if the mover's own king ends up attacked.

use super::{Board, Color, Piece, Placement, Square, SquareList};

impl Board {
    /// Membership test against the pseudo-legal set; no king-safety check
    #[must_use]
    pub fn is_valid_move(&self, index: usize, to: Square) -> bool {
        self.pseudo_legal_moves(index).contains(to)
    }

    /// Full legality check for moving the piece at `mover` from `from`
    /// to `to`.
    ///
    /// Re-derives the pseudo-legal set from the unmodified board rather
    /// than trusting a caller-supplied one, so it stays correct under
    /// nested simulation. The board itself is never mutated; the move is
    /// applied to a private clone.
    #[must_use]
    pub fn would_be_legal_move(&self, mover: usize, from: Square, to: Square) -> bool {
        let Some(piece) = self.piece(mover) else {
            return false;
        };
        let side = piece.color;
        let kind = piece.kind;

        if !self.pseudo_legal_moves(mover).contains(to) {
            return false;
        }

        let mut sim = self.clone();

        // Resolve the captured piece: the enemy on the destination, or
        // the en-passant victim when a pawn takes the window target.
        let mut captured = self
            .occupant(to)
            .filter(|&i| i != mover && self.pieces[i].color != side);
        if captured.is_none() && kind == Piece::Pawn {
            if let Some(ep) = self.en_passant {
                if to == ep.target {
                    captured = self
                        .piece(ep.victim)
                        .filter(|v| v.kind == Piece::Pawn && v.color != side)
                        .map(|_| ep.victim);
                }
            }
        }
        if let Some(i) = captured {
            sim.mark_captured(i);
        }

        // A two-square king step is castling: the king may not start on
        // or pass through an attacked square. The destination square is
        // not separately checked here, matching the source rules this
        // engine reproduces (see DESIGN.md).
        if kind == Piece::King && file_distance(from, to) == 2 {
            let opponent = side.opponent();
            if self.is_square_attacked(from, opponent) {
                return false;
            }
            let step: isize = if to.file() > from.file() { 1 } else { -1 };
            if let Some(mid) = from.offset(0, step) {
                if self.is_square_attacked(mid, opponent) {
                    return false;
                }
            }
            let (corner_file, rook_file) = if step > 0 { (7, 5) } else { (0, 3) };
            if let Some(rook) = sim.castling_rook(side, Square(from.rank(), corner_file)) {
                sim.pieces[rook].placement = Placement::At(Square(from.rank(), rook_file));
            }
        }

        sim.pieces[mover].placement = Placement::At(to);

        // Reject outright if the king is gone; otherwise the move is
        // legal exactly when the king's square is safe afterwards.
        let Some(king) = sim.find_king(side) else {
            return false;
        };
        sim.pieces[king]
            .square()
            .map_or(false, |sq| !sim.is_square_attacked(sq, side.opponent()))
    }

    /// Pseudo-legal destinations filtered down to the fully legal ones
    #[must_use]
    pub fn legal_moves(&self, index: usize) -> SquareList {
        let mut legals = SquareList::new();
        let Some(piece) = self.piece(index) else {
            return legals;
        };
        let Some(from) = piece.square() else {
            return legals;
        };
        for &to in &self.pseudo_legal_moves(index) {
            if self.would_be_legal_move(index, from, to) {
                legals.push(to);
            }
        }
        legals
    }

    /// Pre-commit guard: the mover exists, belongs to `side_to_move`,
    /// and the move is fully legal.
    #[must_use]
    pub fn can_commit_move(
        &self,
        mover: usize,
        from: Square,
        to: Square,
        side_to_move: Color,
    ) -> bool {
        match self.piece(mover) {
            Some(piece) if piece.color == side_to_move => {
                self.would_be_legal_move(mover, from, to)
            }
            _ => false,
        }
    }
}

#[inline]
fn file_distance(a: Square, b: Square) -> usize {
    (a.file() as isize - b.file() as isize).unsigned_abs()
}
