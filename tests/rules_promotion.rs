//! Promotion rules: men are crowned on the farthest row, exactly once, for
//! both colors, and a crowned piece immediately moves as a queen.

use libdraughts::draughts::board::coord::Coord;
use libdraughts::draughts::board::piece::{Color, Piece, Rank};
use libdraughts::draughts::board::r#move::Move;
use libdraughts::draughts::board::Board;

fn c(col: i8, row: i8) -> Coord {
    Coord::new(col, row)
}

fn board_with(turn: Color, pieces: &[(Color, Rank, i8, i8)]) -> Board {
    let mut b = Board::new();
    for &(color, rank, col, row) in pieces {
        b.place(Piece::new(color, rank, c(col, row)));
    }
    b.set_side_to_move(turn);
    b
}

#[test]
fn white_promotes_on_row_eight() {
    let b = board_with(Color::White, &[(Color::White, Rank::Man, 3, 7)]);

    let next = b.make_move(Move::simple(c(3, 7), c(4, 8))).unwrap();
    let piece = next.piece_at(c(4, 8)).unwrap();
    assert!(piece.is_queen());
    assert_eq!(Rank::Queen, piece.rank());
}

#[test]
fn black_promotes_on_row_one() {
    let b = board_with(Color::Black, &[(Color::Black, Rank::Man, 4, 2)]);

    let next = b.make_move(Move::simple(c(4, 2), c(3, 1))).unwrap();
    assert!(next.piece_at(c(3, 1)).unwrap().is_queen());
}

#[test]
fn promotion_happens_exactly_once() {
    let mut piece = Piece::new(Color::White, Rank::Man, c(3, 7));
    piece.relocate(c(4, 8));
    assert!(piece.is_queen());

    piece.promote();
    assert!(piece.is_queen());

    // Returning to the back row later changes nothing either.
    piece.relocate(c(5, 7));
    piece.relocate(c(6, 8));
    assert!(piece.is_queen());
    assert_eq!(Rank::Queen, piece.rank());
}

#[test]
fn back_row_moves_carry_the_promotion_flag() {
    let b = board_with(Color::White, &[(Color::White, Rank::Man, 3, 7)]);
    let piece = *b.piece_at(c(3, 7)).unwrap();

    let moves = piece.valid_moves(&b, true);
    assert_eq!(2, moves.len());
    assert!(moves.iter().all(Move::is_promotion));
}

#[test]
fn queens_reaching_the_back_row_do_not_promote_again() {
    let b = board_with(Color::White, &[(Color::White, Rank::Queen, 5, 5)]);
    let piece = *b.piece_at(c(5, 5)).unwrap();

    let to_back_row = piece
        .valid_moves(&b, true)
        .into_iter()
        .find(|m| m.to() == c(8, 8))
        .unwrap();
    assert!(!to_back_row.is_promotion());
}

#[test]
fn a_capture_onto_the_back_row_promotes() {
    let b = board_with(
        Color::White,
        &[
            (Color::White, Rank::Man, 4, 6),
            (Color::Black, Rank::Man, 5, 7),
        ],
    );
    let piece = *b.piece_at(c(4, 6)).unwrap();

    let captures = piece.valid_moves(&b, false);
    assert_eq!(1, captures.len());
    assert_eq!(c(6, 8), captures[0].to());
    assert!(captures[0].is_capture());
    assert!(captures[0].is_promotion());

    let next = b.make_move(captures[0]).unwrap();
    assert!(next.piece_at(c(6, 8)).unwrap().is_queen());
    assert!(next.piece_at(c(5, 7)).is_none());
}

#[test]
fn promoted_piece_moves_like_a_queen() {
    let b = board_with(Color::White, &[(Color::White, Rank::Man, 3, 7)]);

    let mut next = b.make_move(Move::simple(c(3, 7), c(4, 8))).unwrap();
    next.set_side_to_move(Color::White);
    let piece = *next.piece_at(c(4, 8)).unwrap();

    let moves = piece.valid_moves(&next, true);
    assert_eq!(7, moves.len());
    assert!(moves.contains(&Move::simple(c(4, 8), c(1, 5))));
    assert!(moves.contains(&Move::simple(c(4, 8), c(8, 4))));
}
