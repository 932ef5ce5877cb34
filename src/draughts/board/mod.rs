use std::fmt::{Display, Formatter};

use arr_macro::arr;
use thiserror::Error;

use crate::draughts::board::coord::{Coord, Direction};
use crate::draughts::board::iter::SquareIterator;
use crate::draughts::board::piece::{Color, Piece};
use crate::draughts::board::r#move::Move;

pub mod coord;
pub mod r#move;
pub mod piece;
pub mod setup;

mod iter;

const BOARD_SIZE: usize = 64;

#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySource(Coord),
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Coord, to: Coord },
}

/// The board owns every piece in play. Captured pieces stay in the owned
/// collection, deactivated, and disappear from all queries.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    squares: [Option<usize>; BOARD_SIZE],
    pieces: Vec<Piece>,
    side_to_move: Color,
}

impl Board {
    pub fn new() -> Self {
        Self {
            squares: arr![None; 64],
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    pub fn populate<S>(&mut self, setup: S)
    where
        S: Fn(&mut Board),
    {
        setup(self);
    }

    /// Puts a piece on its square. Placement is a setup-time contract: the
    /// square must be a dark square on the board and must be free.
    pub fn place(&mut self, piece: Piece) {
        let coord = piece.coord();
        assert!(!self.outside(coord), "{coord} is off the board");
        assert!(coord.is_dark(), "{coord} is not a playable square");
        assert!(
            self.squares[coord.index()].is_none(),
            "{coord} is already occupied"
        );

        self.squares[coord.index()] = Some(self.pieces.len());
        self.pieces.push(piece);
    }

    pub fn outside(&self, coord: Coord) -> bool {
        !coord.on_board()
    }

    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        if self.outside(coord) {
            return None;
        }
        self.squares[coord.index()].map(|id| &self.pieces[id])
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub fn squares(&self) -> impl Iterator<Item = Option<&Piece>> + '_ {
        SquareIterator::new(self)
    }

    pub fn pieces(&self) -> Vec<Piece> {
        self.pieces
            .iter()
            .filter(|p| p.is_active())
            .copied()
            .collect()
    }

    pub fn team(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces
            .iter()
            .filter(move |p| p.is_active() && p.color() == color)
    }

    /// True while any piece of `color` has a capture it could play. For as
    /// long as that holds, every non-capturing move of that color is
    /// illegal.
    pub fn has_capture_available(&self, color: Color) -> bool {
        self.team(color)
            .any(|p| p.valid_moves(self, false).iter().any(Move::is_capture))
    }

    /// Every move the side to move may play in the current position.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.team(self.side_to_move)
            .flat_map(|p| p.valid_moves(self, true))
            .collect()
    }

    /// Attempts to play the given move. The board is not modified, but
    /// copied and returned as an owned object with the move applied, the
    /// jumped piece (if any) out of play and the turn passed on.
    pub fn make_move(&self, mov: Move) -> Result<Board, MoveError> {
        let id = self
            .piece_index(mov.from())
            .ok_or(MoveError::EmptySource(mov.from()))?;
        if !self.pieces[id].is_valid_move(self, mov.to()) {
            return Err(MoveError::IllegalMove {
                from: mov.from(),
                to: mov.to(),
            });
        }

        let mut b = self.clone();
        if let Some(victim) = self.victim_between(mov.from(), mov.to()) {
            if let Some(victim_id) = b.piece_index(victim) {
                b.pieces[victim_id].deactivate();
                b.squares[victim.index()] = None;
            }
        }
        b.squares[mov.from().index()] = None;
        b.pieces[id].relocate(mov.to());
        b.squares[mov.to().index()] = Some(id);
        b.side_to_move = b.side_to_move.other();
        Ok(b)
    }

    fn piece_index(&self, coord: Coord) -> Option<usize> {
        if self.outside(coord) {
            return None;
        }
        self.squares[coord.index()]
    }

    // First enemy square strictly between the two coordinates. A move that
    // passed validation jumps at most one piece.
    fn victim_between(&self, from: Coord, to: Coord) -> Option<Coord> {
        let dir = Direction::between(from, to)?;
        let mover = self.piece_at(from)?.color();
        let mut cursor = from + dir;
        while cursor != to {
            if let Some(p) = self.piece_at(cursor) {
                if p.color() == mover.other() {
                    return Some(cursor);
                }
            }
            cursor = cursor + dir;
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in (1..=8).rev() {
            write!(f, "{row}")?;
            for col in 1..=8 {
                let glyph = match self.piece_at(Coord::new(col, row)) {
                    Some(p) => p.glyph(),
                    None => '.',
                };
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
