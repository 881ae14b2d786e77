use std::str::FromStr;

use super::builder::placed_piece;
use super::error::FenError;
use super::{Board, Color, PieceKind, Square};

impl Board {
    /// Parse the piece-placement field of a FEN string.
    ///
    /// Only the first whitespace-separated field is read; side to move,
    /// castling and clocks are ignored. The first rank listed (rank 8)
    /// lands on row 0.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 8 - row;
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let square = Square::new(row, col).ok_or(FenError::WrongFileCount {
                    rank,
                    files: col + 1,
                })?;
                board.put(square, Some(placed_piece(square, color, kind)));
                col += 1;
            }
            if col != 8 {
                return Err(FenError::WrongFileCount { rank, files: col });
            }
        }

        Ok(board)
    }

    /// Piece-placement field describing this board
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                fen.push('/');
            }
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
        }
        fen
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
