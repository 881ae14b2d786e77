//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece movement rules and the legality filter
//! - `make_move.rs` - Move application, promotion and board purity
//! - `edge_cases.rs` - Check, checkmate, stalemate and move descriptions
//! - `proptest.rs` - Property-based tests over random play

mod movegen;

use crate::board::{Board, CandidateMove, Color, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn board(fen: &str) -> Board {
    Board::try_from_fen(fen).unwrap()
}

fn find_move(board: &Board, from: Square, to: Square, color: Color) -> CandidateMove {
    board
        .legal_moves(from, color)
        .into_iter()
        .find(|mv| mv.to == to)
        .expect("expected move not found")
}

fn destinations(moves: &[CandidateMove]) -> Vec<Square> {
    let mut squares: Vec<Square> = moves.iter().map(|mv| mv.to).collect();
    squares.sort();
    squares
}
