use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square};

/// An 8×8 grid of optional pieces, indexed `[row][col]`.
///
/// Boards are snapshots: rule code never mutates a board it was handed,
/// transitions return a fresh copy instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position. Black occupies rows 0-1, White rows 6-7.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in PieceKind::BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                board.put(Square(color.back_row(), col), Some(Piece::new(kind, color)));
                board.put(
                    Square(color.pawn_start_row(), col),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    /// A board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Piece on `square`, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row()][square.col()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Every occupied square with its piece, row by row from a8
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Occupied squares of one color
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Number of pieces of `color` on the board
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    /// Square of `color`'s king, if it has one
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Overwrite one cell. Only used while building a fresh board.
    #[inline]
    pub(crate) fn put(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row()][square.col()] = piece;
    }
}

impl fmt::Display for Board {
    /// Text diagram: uppercase White, lowercase Black, `.` for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let c = cell.map_or('.', Piece::to_fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
