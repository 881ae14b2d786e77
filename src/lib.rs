//! Rules engine for two-player chess on an 8×8 board.
//!
//! The `board` module holds the rules: movement, attack detection, the
//! king-safety filter, move application and end-of-game detection. The
//! `rules` module exposes the same operations as free functions, and
//! `game` wraps them in the state a front-end keeps between clicks.
//!
//! Castling, en passant, underpromotion and draw-by-repetition or
//! fifty-move rules are not part of this variant; pawns always promote to
//! a queen.

pub mod board;
pub mod cli;
pub mod game;
pub mod rules;

pub use board::{
    describe_move, Board, CandidateMove, Color, GameStatus, MoveRecord, Piece, PieceKind, Square,
};
pub use game::Game;
