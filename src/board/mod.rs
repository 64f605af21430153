//! Chess board representation and rules.
//!
//! Keeps the authoritative piece list, generates pseudo-legal and legal
//! moves, and commits moves including castling, en passant, and promotion.
//! Legality uses the simulate-then-check approach: candidate moves are
//! applied to a private copy of the board and rejected if the mover's own
//! king ends up attacked.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color};
//!
//! let board = Board::new();
//! let e2_pawn = 12; // white e-pawn in the standard setup order
//! let moves = board.legal_moves(e2_pawn);
//! assert_eq!(moves.len(), 2);
//! assert!(!board.is_in_check(Color::White));
//! ```

mod attack;
mod builder;
mod commit;
#[cfg(debug_assertions)]
mod debug;
mod error;
mod layout;
mod legality;
mod movegen;
pub mod prelude;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::SquareError;
pub use state::{Board, BoardPiece, EnPassant, Placement, RenderHandle};
pub use types::{Color, Piece, Square, SquareList, SquareListIntoIter};

// Public API - standard-layout helpers for default selection
pub use layout::{standard_piece_index, standard_square_for_index};
