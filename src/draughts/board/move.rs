use crate::draughts::board::coord::Coord;

use bitflags::bitflags;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Flags(u8);

bitflags! {
    impl Flags: u8 {
        const QUIET = 0b00;
        const CAPTURE = 0b01;
        const PROMOTION = 0b10;
    }
}

/// A candidate move, immutable once produced. Capture moves carry the
/// square of the jumped piece.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Move {
    from: Coord,
    to: Coord,
    captured: Option<Coord>,
    flags: Flags,
}

impl Move {
    pub fn simple(from: Coord, to: Coord) -> Self {
        Self {
            from,
            to,
            captured: None,
            flags: Flags::QUIET,
        }
    }

    pub fn capture(from: Coord, to: Coord, victim: Coord) -> Self {
        Self {
            from,
            to,
            captured: Some(victim),
            flags: Flags::CAPTURE,
        }
    }

    /// Marks the move as crowning the piece on arrival.
    pub fn promoting(mut self) -> Self {
        self.flags |= Flags::PROMOTION;
        self
    }

    pub fn is_capture(&self) -> bool {
        self.flags.contains(Flags::CAPTURE)
    }

    pub fn is_promotion(&self) -> bool {
        self.flags.contains(Flags::PROMOTION)
    }

    pub fn from(&self) -> Coord {
        self.from
    }

    pub fn to(&self) -> Coord {
        self.to
    }

    pub fn captured(&self) -> Option<Coord> {
        self.captured
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_capture() {
            write!(f, "{} x {}", self.from, self.to)
        } else {
            write!(f, "{} -> {}", self.from, self.to)
        }
    }
}
