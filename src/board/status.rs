//! Check, checkmate and stalemate detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color};

/// Classification of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Returns true for checkmate and stalemate
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    /// Returns true if `color`'s king is attacked. A side with no king is
    /// never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// Returns true if `color` has at least one legal move.
    #[must_use]
    pub fn has_any_move(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|(from, _)| !self.legal_moves(from, color).is_empty())
    }

    /// Classify the position with `color` to move.
    #[must_use]
    pub fn classify(&self, color: Color) -> GameStatus {
        if self.has_any_move(color) {
            return GameStatus::Ongoing;
        }
        if self.is_in_check(color) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }

    #[inline]
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.classify(color) == GameStatus::Checkmate
    }

    #[inline]
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        self.classify(color) == GameStatus::Stalemate
    }
}
