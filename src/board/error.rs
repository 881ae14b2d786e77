//! Error types for board and game operations.

use std::fmt;

use super::{Color, Square};

/// Error type for FEN placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Input contained no placement field
    Empty,
    /// Invalid piece character in placement string
    InvalidPiece { char: char },
    /// Placement did not describe exactly 8 ranks
    WrongRankCount { found: usize },
    /// A rank did not describe exactly 8 files
    WrongFileCount { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty FEN string"),
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for moves entered through the game controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game already ended
    GameOver,
    /// No piece stands on the origin square
    NoPiece { square: Square },
    /// The origin holds a piece of the side not to move
    WrongColor { square: Square, to_move: Color },
    /// The destination is not among the piece's legal moves
    IllegalMove { from: Square, to: Square },
    /// Move text could not be parsed
    InvalidNotation { notation: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "The game is over"),
            MoveError::NoPiece { square } => write!(f, "No piece on {square}"),
            MoveError::WrongColor { square, to_move } => {
                write!(f, "The piece on {square} does not belong to {to_move}")
            }
            MoveError::IllegalMove { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
            MoveError::InvalidNotation { notation } => {
                write!(f, "Invalid move notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveError {}

impl From<SquareError> for MoveError {
    fn from(err: SquareError) -> Self {
        match err {
            SquareError::InvalidNotation { notation } => MoveError::InvalidNotation { notation },
            other => MoveError::InvalidNotation {
                notation: other.to_string(),
            },
        }
    }
}
