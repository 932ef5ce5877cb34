use crate::draughts::board::Board;

pub fn perft(depth: usize, board: &Board) -> usize {
    if depth == 0 {
        return 1;
    }
    board
        .legal_moves()
        .into_iter()
        .filter_map(|m| board.make_move(m).ok())
        .map(|b| perft(depth - 1, &b))
        .sum()
}
