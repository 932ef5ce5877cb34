//! Rules library for checkers (draughts) on an 8x8 board: move legality,
//! capture detection, mandatory-capture enforcement and promotion.

pub mod draughts;
