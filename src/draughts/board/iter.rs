use crate::draughts::board::piece::Piece;
use crate::draughts::board::{Board, BOARD_SIZE};

/// Walks the 64 squares in row-major order, yielding the occupant of each.
pub struct SquareIterator<'a> {
    board: &'a Board,
    index: usize,
}

impl<'a> SquareIterator<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board, index: 0 }
    }
}

impl<'a> Iterator for SquareIterator<'a> {
    type Item = Option<&'a Piece>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= BOARD_SIZE {
            return None;
        }
        let item = self.board.squares[self.index].map(|id| &self.board.pieces[id]);
        self.index += 1;
        Some(item)
    }
}
