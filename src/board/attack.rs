//! Attack detection.

use super::movegen::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use super::{Board, Color, Piece, Square};

impl Board {
    /// Whether any on-board piece of `by` reaches `target` under its raw
    /// movement rule, ignoring whose turn it is and ignoring check.
    ///
    /// This is a point-in-time test recomputed from scratch on every
    /// call; nothing is cached, so it cannot go stale.
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        self.pieces.iter().any(|piece| {
            if piece.color != by {
                return false;
            }
            let Some(from) = piece.square() else {
                return false;
            };
            match piece.kind {
                Piece::Pawn => {
                    let dir = by.pawn_direction();
                    from.offset(dir, -1) == Some(target) || from.offset(dir, 1) == Some(target)
                }
                Piece::Knight => KNIGHT_OFFSETS
                    .iter()
                    .any(|&(dr, df)| from.offset(dr, df) == Some(target)),
                Piece::King => KING_OFFSETS
                    .iter()
                    .any(|&(dr, df)| from.offset(dr, df) == Some(target)),
                kind => self.slider_reaches(from, kind, target),
            }
        })
    }

    /// Ray-cast along the slider's directions; a ray registers an attack
    /// on the first occupied square it meets and halts there.
    fn slider_reaches(&self, from: Square, kind: Piece, target: Square) -> bool {
        let diagonal = kind.attacks_diagonally() && self.ray_reaches(from, &BISHOP_DIRECTIONS, target);
        let straight = kind.attacks_straight() && self.ray_reaches(from, &ROOK_DIRECTIONS, target);
        diagonal || straight
    }

    fn ray_reaches(&self, from: Square, directions: &[(isize, isize)], target: Square) -> bool {
        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                if to == target {
                    return true;
                }
                if !self.is_empty(to) {
                    break;
                }
                current = to;
            }
        }
        false
    }
}
