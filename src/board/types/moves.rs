//! Candidate move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::square::Square;

/// A destination reachable by the piece on some queried origin.
///
/// The origin is implicit: it is the square the moves were generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CandidateMove {
    pub to: Square,
    pub capture: bool,
    pub promotion: Option<PieceKind>,
}

impl CandidateMove {
    /// Create a non-capturing move
    #[inline]
    #[must_use]
    pub const fn quiet(to: Square) -> Self {
        CandidateMove {
            to,
            capture: false,
            promotion: None,
        }
    }

    /// Create a capturing move
    #[inline]
    #[must_use]
    pub const fn capture(to: Square) -> Self {
        CandidateMove {
            to,
            capture: true,
            promotion: None,
        }
    }

    /// Tag this move as promoting to `kind`
    #[inline]
    #[must_use]
    pub const fn promoting(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }

    /// Returns true if this move promotes a pawn
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Display for CandidateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.capture {
            write!(f, "x")?;
        }
        write!(f, "{}", self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.to_char().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

/// Selects how movement rules treat pawns.
///
/// `Attack` reports the squares a piece threatens: pawn diagonals count
/// whether or not something stands there, pawn pushes do not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveMode {
    Normal,
    Attack,
}
