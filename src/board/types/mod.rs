//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules
//! engine:
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Square` - board square as (rank, file)
//! - `SquareList` - fixed-capacity list of destination squares

mod list;
mod piece;
mod square;

// Re-export all public types
pub use list::{SquareList, SquareListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;
