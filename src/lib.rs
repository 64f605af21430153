pub mod board;

pub use board::{Board, BoardBuilder, Color, EnPassant, Piece, Placement, Square, SquareList};
