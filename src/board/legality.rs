use super::{Board, CandidateMove, Color, MoveMode, Square};

impl Board {
    /// Legal moves for the piece on `from` when `color` is moving.
    ///
    /// Empty when the square is empty or holds a piece of the other color.
    /// Each pseudo-legal candidate is played on a scratch board and dropped
    /// if it leaves `color`'s king attacked.
    #[must_use]
    pub fn legal_moves(&self, from: Square, color: Color) -> Vec<CandidateMove> {
        match self.piece_at(from) {
            Some(piece) if piece.color == color => {}
            _ => return Vec::new(),
        }

        self.pseudo_moves(from, MoveMode::Normal)
            .into_iter()
            .filter(|mv| !self.apply_move(from, mv).is_in_check(color))
            .collect()
    }

    /// Every legal move of `color` as (origin, move) pairs
    #[must_use]
    pub fn all_legal_moves(&self, color: Color) -> Vec<(Square, CandidateMove)> {
        self.pieces_of(color)
            .flat_map(|(from, _)| {
                self.legal_moves(from, color)
                    .into_iter()
                    .map(move |mv| (from, mv))
            })
            .collect()
    }
}
