//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let e1 = "e1".parse::<Square>().unwrap();
//! let e8 = "e8".parse::<Square>().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, PieceKind::King)
//!     .piece(e8, Color::Black, PieceKind::King)
//!     .build();
//! assert_eq!(board.count(Color::White), 1);
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let pieces = Board::new().pieces().collect();
        BoardBuilder { pieces }
    }

    /// Place a piece on the board, replacing whatever stood there.
    ///
    /// Pawns placed off their starting row are marked as having moved.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, placed_piece(square, color, kind)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.put(square, Some(piece));
        }
        board
    }
}

/// A piece placed directly on `square`.
pub(crate) fn placed_piece(square: Square, color: Color, kind: PieceKind) -> Piece {
    let mut piece = Piece::new(kind, color);
    piece.has_moved = kind == PieceKind::Pawn && square.row() != color.pawn_start_row();
    piece
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build();
        assert_eq!(built, Board::new());
    }

    #[test]
    fn test_empty_board() {
        let board = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, PieceKind::King)
            .piece(Square(0, 4), Color::Black, PieceKind::King)
            .build();

        assert!(board.piece_at(Square(7, 4)).is_some());
        assert!(board.piece_at(Square(0, 4)).is_some());
        assert!(board.piece_at(Square(0, 0)).is_none());
    }

    #[test]
    fn test_piece_replaces_existing() {
        let board = BoardBuilder::starting_position()
            .piece(Square(7, 0), Color::Black, PieceKind::Queen)
            .build();
        let piece = board.piece_at(Square(7, 0)).unwrap();
        assert_eq!(piece.kind, PieceKind::Queen);
        assert_eq!(piece.color, Color::Black);
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(Square(7, 0)) // white rook on a1
            .build();

        assert!(board.piece_at(Square(7, 0)).is_none());
        assert!(board.piece_at(Square(7, 1)).is_some());
    }

    #[test]
    fn test_advanced_pawn_marked_moved() {
        let board = BoardBuilder::new()
            .piece(Square(3, 3), Color::White, PieceKind::Pawn)
            .piece(Square(6, 3), Color::White, PieceKind::Pawn)
            .build();
        assert!(board.piece_at(Square(3, 3)).unwrap().has_moved);
        assert!(!board.piece_at(Square(6, 3)).unwrap().has_moved);
    }
}
