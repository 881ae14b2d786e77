//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.classify(Color::White), GameStatus::Ongoing);
//! ```

pub use super::{
    describe_move, Board, BoardBuilder, CandidateMove, Color, FenError, GameStatus, MoveError,
    MoveRecord, Piece, PieceKind, Square, SquareError,
};
