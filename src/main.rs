use libdraughts::draughts::board::setup::default_setup;
use libdraughts::draughts::board::Board;
use libdraughts::draughts::perft::perft;
use std::time::Instant;

fn main() {
    let mut b = Board::new();
    b.populate(default_setup);
    println!("{b}\n");

    let start = Instant::now();
    let nodes = perft(5, &b);
    let end = Instant::now();
    println!("perft(5) = {nodes}");
    println!("Time elapsed: {:?}", end - start);
}
