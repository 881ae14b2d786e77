//! Board representation and chess rules.
//!
//! A `Board` is an 8×8 grid of optional pieces. Every rule is a query on
//! a board; `apply_move` is the only way to get a new position and it
//! never touches the board it is called on.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Square};
//!
//! let board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! let moves = board.legal_moves(e2, Color::White);
//! assert_eq!(moves.len(), 2);
//! ```

mod attacks;
mod builder;
mod error;
mod fen;
mod legality;
mod make_move;
mod movegen;
mod notation;
pub mod prelude;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, SquareError};
pub use notation::{describe_move, MoveRecord};
pub use state::Board;
pub use status::GameStatus;
pub use types::{CandidateMove, Color, MoveMode, Piece, PieceKind, Square};
