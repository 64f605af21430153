use super::{Board, Color};

#[cfg(debug_assertions)]
impl Board {
    /// Debug helper to print the board as an ASCII grid
    pub fn print_board(&self) {
        println!("  +---+---+---+---+---+---+---+---+");
        for rank in (0..8).rev() {
            print!("{} |", rank + 1);
            for file in 0..8 {
                let ch = self
                    .piece_at(super::Square(rank, file))
                    .map_or('.', |(color, piece)| piece.to_char_colored(color));
                print!(" {ch} |");
            }
            println!("\n  +---+---+---+---+---+---+---+---+");
        }
        println!("    a   b   c   d   e   f   g   h");
        if let Some(ep) = self.en_passant {
            println!("EP target: {} (victim index {})", ep.target, ep.victim);
        }
        for side in Color::BOTH {
            if self.is_in_check(side) {
                println!("{side} is in check");
            }
        }
        println!("------------------------------------");
    }
}
