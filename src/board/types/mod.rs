//! Core chess types.
//!
//! This module contains the value types shared by every rule:
//! - `PieceKind`, `Color` and `Piece` - what stands on a square
//! - `Square` - an in-bounds (row, col) coordinate
//! - `CandidateMove` and `MoveMode` - movement rule output

mod moves;
mod piece;
mod square;

pub use moves::{CandidateMove, MoveMode};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
