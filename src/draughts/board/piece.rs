use crate::draughts::board::coord::{Coord, Direction};
use crate::draughts::board::r#move::Move;
use crate::draughts::board::Board;

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const fn other(&self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Row step a man of this color takes when moving forward.
    pub const fn forward(&self) -> i8 {
        match self {
            Color::Black => -1,
            Color::White => 1,
        }
    }

    /// The farthest row for this color. A man arriving here is crowned.
    pub const fn promotion_row(&self) -> i8 {
        match self {
            Color::Black => 1,
            Color::White => 8,
        }
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Rank {
    Man,
    Queen,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Piece {
    color: Color,
    rank: Rank,
    coord: Coord,
    active: bool,
}

impl Piece {
    pub fn new(color: Color, rank: Rank, coord: Coord) -> Self {
        Self {
            color,
            rank,
            coord,
            active: true,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn is_queen(&self) -> bool {
        self.rank == Rank::Queen
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn glyph(&self) -> char {
        match (self.color, self.rank) {
            (Color::White, Rank::Man) => 'w',
            (Color::White, Rank::Queen) => 'W',
            (Color::Black, Rank::Man) => 'b',
            (Color::Black, Rank::Queen) => 'B',
        }
    }

    /// Crowns the piece. Crowning an already crowned piece changes nothing.
    pub fn promote(&mut self) {
        self.rank = Rank::Queen;
    }

    /// Moves the piece to `to`, crowning it when that is the farthest row
    /// for its color. Going through [`Board::make_move`] keeps the board's
    /// occupancy in sync with the new coordinate.
    pub fn relocate(&mut self, to: Coord) {
        self.coord = to;
        if to.row() == self.color.promotion_row() {
            self.promote();
        }
    }

    /// Takes the piece out of play. It keeps its state but is no longer
    /// reported by any board query.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Checks a single candidate destination against the current board.
    ///
    /// Never fails: anything that is not a legal destination for this piece
    /// right now answers `false`, including coordinates off the board,
    /// light squares and queries made while the other color is on the move.
    pub fn is_valid_move(&self, board: &Board, target: Coord) -> bool {
        if !self.active || board.outside(target) || board.side_to_move() != self.color {
            return false;
        }
        if !target.is_dark() {
            return false;
        }

        match self.rank {
            Rank::Man => self.is_valid_man_target(board, target),
            Rank::Queen => self.is_valid_queen_target(board, target),
        }
    }

    fn is_valid_man_target(&self, board: &Board, target: Coord) -> bool {
        let dc = target.col() - self.coord.col();
        let dr = target.row() - self.coord.row();

        // One step along a forward diagonal. Quiet moves are only available
        // while nobody on the team has a capture.
        if dc.abs() == 1 && dr == self.color.forward() {
            return board.piece_at(target).is_none() && !board.has_capture_available(self.color);
        }

        // Two steps along any diagonal, jumping an adjacent enemy.
        if dc.abs() == 2 && dr.abs() == 2 {
            if board.piece_at(target).is_some() {
                return false;
            }
            let jumped = self.coord.offset(dc / 2, dr / 2);
            return board
                .piece_at(jumped)
                .map_or(false, |p| p.color() == self.color.other());
        }

        false
    }

    fn is_valid_queen_target(&self, board: &Board, target: Coord) -> bool {
        let Some(dir) = Direction::between(self.coord, target) else {
            return false;
        };

        let mut jumped = None;
        let mut cursor = self.coord + dir;
        while cursor != target {
            if let Some(p) = board.piece_at(cursor) {
                if p.color() == self.color || jumped.is_some() {
                    return false;
                }
                jumped = Some(cursor);
            }
            cursor = cursor + dir;
        }
        if board.piece_at(target).is_some() {
            return false;
        }

        match jumped {
            // A jump comes down directly behind the captured piece.
            Some(victim) => victim + dir == target,
            None => !board.has_capture_available(self.color),
        }
    }

    /// All moves this piece may play in the current position. With
    /// `include_simple` set to `false` only captures are produced, which is
    /// how team-wide capture pressure is probed.
    ///
    /// Returns a fresh list each call; an inactive or off-turn piece has no
    /// moves.
    pub fn valid_moves(&self, board: &Board, include_simple: bool) -> Vec<Move> {
        if !self.active || board.side_to_move() != self.color {
            return Vec::new();
        }
        match self.rank {
            Rank::Man => self.man_moves(board, include_simple),
            Rank::Queen => self.queen_moves(board, include_simple),
        }
    }

    fn man_moves(&self, board: &Board, include_simple: bool) -> Vec<Move> {
        let mut moves = Vec::new();
        let forward = self.color.forward();

        for side in [-1, 1] {
            let one_forward = self.coord.offset(side, forward);
            let two_forward = self.coord.offset(2 * side, 2 * forward);
            let one_backward = self.coord.offset(side, -forward);
            let two_backward = self.coord.offset(2 * side, -2 * forward);

            if include_simple && self.is_valid_move(board, one_forward) {
                moves.push(self.man_move(one_forward, None));
            }
            if self.is_valid_move(board, two_forward) {
                moves.push(self.man_move(two_forward, Some(one_forward)));
            }
            if self.is_valid_move(board, two_backward) {
                moves.push(self.man_move(two_backward, Some(one_backward)));
            }
        }

        moves
    }

    fn man_move(&self, to: Coord, victim: Option<Coord>) -> Move {
        let mov = match victim {
            Some(v) => Move::capture(self.coord, to, v),
            None => Move::simple(self.coord, to),
        };
        if to.row() == self.color.promotion_row() {
            mov.promoting()
        } else {
            mov
        }
    }

    fn queen_moves(&self, board: &Board, include_simple: bool) -> Vec<Move> {
        let include_simple = include_simple && !board.has_capture_available(self.color);
        Direction::DIAGONALS
            .iter()
            .flat_map(|&dir| self.scan_ray(board, dir, include_simple))
            .collect()
    }

    /// Walks outward along one diagonal. Empty squares are quiet-move
    /// candidates until a piece blocks the ray; the first enemy may be
    /// jumped onto the square directly behind it, which ends the ray. A
    /// friend, or a second enemy before the landing, ends the ray with no
    /// further moves.
    fn scan_ray(&self, board: &Board, dir: Direction, include_simple: bool) -> Vec<Move> {
        let mut moves = Vec::new();
        let mut passed: Option<Coord> = None;

        let mut cursor = self.coord + dir;
        while !board.outside(cursor) {
            match board.piece_at(cursor) {
                None => {
                    if let Some(victim) = passed {
                        moves.push(Move::capture(self.coord, cursor, victim));
                        break;
                    }
                    if include_simple {
                        moves.push(Move::simple(self.coord, cursor));
                    }
                }
                Some(p) if p.color() == self.color => break,
                Some(_) if passed.is_some() => break,
                Some(_) => passed = Some(cursor),
            }
            cursor = cursor + dir;
        }

        moves
    }
}
