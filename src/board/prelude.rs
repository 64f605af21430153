//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    standard_piece_index, standard_square_for_index, Board, BoardBuilder, BoardPiece, Color,
    EnPassant, Piece, Placement, Square, SquareError, SquareList,
};
