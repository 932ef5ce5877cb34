use crate::draughts::board::coord::Coord;
use crate::draughts::board::piece::{Color, Piece, Rank};
use crate::draughts::board::Board;

/// Twelve men per side on the dark squares of the three rows nearest each
/// player. White sits on rows 1 to 3 and moves up the board.
pub fn default_setup(b: &mut Board) {
    // white pieces
    for row in 1..=3 {
        for col in 1..=8 {
            let coord = Coord::new(col, row);
            if coord.is_dark() {
                b.place(Piece::new(Color::White, Rank::Man, coord));
            }
        }
    }

    // black pieces
    for row in 6..=8 {
        for col in 1..=8 {
            let coord = Coord::new(col, row);
            if coord.is_dark() {
                b.place(Piece::new(Color::Black, Rank::Man, coord));
            }
        }
    }
}
