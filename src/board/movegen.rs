//! Pseudo-legal move generation.
//!
//! Produces each piece's raw-movement destinations, ignoring whether the
//! mover's own king would be left in check; that is the legality filter's
//! job. Castling appears here gated only on the has-moved flags and empty
//! intervening squares, with attack safety likewise deferred.

use super::{Board, Color, Piece, Square, SquareList};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Pseudo-legal destinations for the piece at `index`.
    ///
    /// Out-of-range indices and captured pieces yield an empty list. The
    /// result is a snapshot; it does not observe later board mutations.
    #[must_use]
    pub fn pseudo_legal_moves(&self, index: usize) -> SquareList {
        let Some(piece) = self.piece(index) else {
            return SquareList::new();
        };
        let Some(from) = piece.square() else {
            return SquareList::new();
        };

        match piece.kind {
            Piece::Pawn => self.pawn_moves(from, piece.color, piece.has_moved),
            Piece::Knight => self.offset_moves(from, piece.color, &KNIGHT_OFFSETS),
            Piece::Bishop => self.sliding_moves(from, piece.color, &BISHOP_DIRECTIONS),
            Piece::Rook => self.sliding_moves(from, piece.color, &ROOK_DIRECTIONS),
            Piece::Queen => self.sliding_moves(from, piece.color, &QUEEN_DIRECTIONS),
            Piece::King => self.king_moves(from, piece.color, piece.has_moved),
        }
    }

    fn pawn_moves(&self, from: Square, color: Color, has_moved: bool) -> SquareList {
        let mut moves = SquareList::new();
        let dir = color.pawn_direction();

        // Single push, and the double push while it is still unmoved
        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                moves.push(one);
                if !has_moved {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.is_empty(two) {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        // Diagonal captures, onto enemy-occupied squares only
        for df in [-1, 1] {
            if let Some(to) = from.offset(dir, df) {
                if self.color_on(to) == Some(color.opponent()) {
                    moves.push(to);
                }
            }
        }

        // En passant: the diagonal forward square matches the window target
        if let Some(ep) = self.en_passant {
            for df in [-1, 1] {
                if from.offset(dir, df) == Some(ep.target) {
                    moves.push(ep.target);
                }
            }
        }

        moves
    }

    fn offset_moves(&self, from: Square, color: Color, offsets: &[(isize, isize)]) -> SquareList {
        let mut moves = SquareList::new();
        for &(dr, df) in offsets {
            if let Some(to) = from.offset(dr, df) {
                if self.color_on(to) != Some(color) {
                    moves.push(to);
                }
            }
        }
        moves
    }

    fn sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> SquareList {
        let mut moves = SquareList::new();
        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                match self.color_on(to) {
                    None => moves.push(to),
                    Some(occupant) => {
                        if occupant != color {
                            moves.push(to);
                        }
                        break;
                    }
                }
                current = to;
            }
        }
        moves
    }

    fn king_moves(&self, from: Square, color: Color, has_moved: bool) -> SquareList {
        let mut moves = self.offset_moves(from, color, &KING_OFFSETS);

        // Castling: two squares toward an unmoved rook over empty squares.
        // Whether the king castles out of or through check is decided by
        // the legality filter, not here.
        if !has_moved {
            let rank = from.rank();
            if let Some(rook) = self.castling_rook(color, Square(rank, 7)) {
                if !self.pieces[rook].has_moved {
                    if let (Some(f), Some(g)) = (from.offset(0, 1), from.offset(0, 2)) {
                        if self.is_empty(f) && self.is_empty(g) {
                            moves.push(g);
                        }
                    }
                }
            }
            if let Some(rook) = self.castling_rook(color, Square(rank, 0)) {
                if !self.pieces[rook].has_moved {
                    if let (Some(d), Some(c), Some(b)) =
                        (from.offset(0, -1), from.offset(0, -2), from.offset(0, -3))
                    {
                        if self.is_empty(d) && self.is_empty(c) && self.is_empty(b) {
                            moves.push(c);
                        }
                    }
                }
            }
        }

        moves
    }

    /// Index of `side`'s rook sitting on `corner`, if any
    pub(crate) fn castling_rook(&self, side: Color, corner: Square) -> Option<usize> {
        self.pieces.iter().position(|p| {
            p.kind == Piece::Rook && p.color == side && p.square() == Some(corner)
        })
    }
}
