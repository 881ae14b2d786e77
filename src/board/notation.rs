//! Human-readable move descriptions.
//!
//! Descriptions read like "White knight g1 → f3" and grow suffixes for
//! captures, promotion and check:
//!
//! ```
//! use chess_rules::board::{Color, MoveRecord, PieceKind};
//!
//! let record = MoveRecord {
//!     color: Color::White,
//!     kind: PieceKind::Knight,
//!     from: "g1".parse().unwrap(),
//!     to: "f3".parse().unwrap(),
//!     captured: None,
//!     promotion: false,
//!     check: false,
//!     mate: false,
//! };
//! assert_eq!(record.to_string(), "White knight g1 → f3");
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, CandidateMove, Color, Piece, PieceKind, Square};

/// Summary of a completed move, kept only to describe it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    /// Color of the side that moved
    pub color: Color,
    /// Kind of the moved piece after the move (queen after promotion)
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub promotion: bool,
    /// The opponent is in check after the move
    pub check: bool,
    /// The opponent is checkmated after the move
    pub mate: bool,
}

impl MoveRecord {
    /// Record `mv` played from `from` on `before`, reading check and mate
    /// from the resulting position.
    ///
    /// Returns `None` when `from` is empty on `before`.
    #[must_use]
    pub fn new(before: &Board, from: Square, mv: &CandidateMove, after: &Board) -> Option<Self> {
        let mover = before.piece_at(from)?;
        let opponent = mover.color.opponent();
        let check = after.is_in_check(opponent);
        let mate = check && !after.has_any_move(opponent);
        Some(MoveRecord {
            color: mover.color,
            kind: mv.promotion.unwrap_or(mover.kind),
            from,
            to: mv.to,
            captured: before.piece_at(mv.to),
            promotion: mv.is_promotion(),
            check,
            mate,
        })
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} → {}", self.color, self.kind, self.from, self.to)?;
        if let Some(captured) = self.captured {
            write!(f, " captures {captured}")?;
        }
        if self.promotion {
            write!(f, " promoting to queen")?;
        }
        if self.mate {
            write!(f, " — checkmate!")?;
        } else if self.check {
            write!(f, " — check.")?;
        }
        Ok(())
    }
}

/// Display string for a completed move
#[must_use]
pub fn describe_move(record: &MoveRecord) -> String {
    record.to_string()
}
