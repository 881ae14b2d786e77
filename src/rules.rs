//! Free-function entry points over `Board`.
//!
//! These take every input explicitly and keep no state between calls, so a
//! front-end can drive the rules without holding anything but a board and
//! the side to move.

use crate::board::{Board, CandidateMove, Color, GameStatus, MoveRecord, Square};

/// Starting position with White to move
#[must_use]
pub fn new_game() -> (Board, Color) {
    (Board::new(), Color::White)
}

/// Legal moves of the piece on `square` for `color`
#[must_use]
pub fn legal_moves(board: &Board, square: Square, color: Color) -> Vec<CandidateMove> {
    board.legal_moves(square, color)
}

/// Legal moves addressed by raw coordinates; empty when off the board
#[must_use]
pub fn legal_moves_at(board: &Board, row: isize, col: isize, color: Color) -> Vec<CandidateMove> {
    Square::from_signed(row, col)
        .map(|square| board.legal_moves(square, color))
        .unwrap_or_default()
}

/// Board after playing `mv` from `origin`; `board` is left as it was
#[must_use]
pub fn apply_move(board: &Board, origin: Square, mv: &CandidateMove) -> Board {
    board.apply_move(origin, mv)
}

#[must_use]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board.is_in_check(color)
}

#[must_use]
pub fn has_any_move(board: &Board, color: Color) -> bool {
    board.has_any_move(color)
}

#[must_use]
pub fn classify(board: &Board, color: Color) -> GameStatus {
    board.classify(color)
}

#[must_use]
pub fn describe_move(record: &MoveRecord) -> String {
    crate::board::describe_move(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let (board, side) = new_game();
        assert_eq!(side, Color::White);
        assert_eq!(board.count(Color::White), 16);
        assert_eq!(board.count(Color::Black), 16);
    }

    #[test]
    fn test_off_board_query_is_empty() {
        let (board, _) = new_game();
        assert!(legal_moves_at(&board, -1, 0, Color::White).is_empty());
        assert!(legal_moves_at(&board, 6, 8, Color::White).is_empty());
        assert_eq!(legal_moves_at(&board, 6, 4, Color::White).len(), 2);
    }

    #[test]
    fn test_enemy_square_is_empty() {
        let (board, _) = new_game();
        let e7 = "e7".parse().unwrap();
        assert!(legal_moves(&board, e7, Color::White).is_empty());
        assert!(legal_moves(&board, "e4".parse().unwrap(), Color::White).is_empty());
    }
}
