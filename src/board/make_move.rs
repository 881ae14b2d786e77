use super::{Board, CandidateMove, Square};

impl Board {
    /// Play `mv` from `from` and return the resulting board.
    ///
    /// `self` is left untouched. The moving piece is marked as moved and
    /// replaced by the promotion kind when there is one; anything on the
    /// destination is captured. The move is not re-validated: callers pass
    /// a move taken from `legal_moves` on this board and origin. An empty
    /// origin yields an unchanged copy.
    #[must_use]
    pub fn apply_move(&self, from: Square, mv: &CandidateMove) -> Board {
        let mut next = self.clone();
        let Some(mut piece) = next.piece_at(from) else {
            return next;
        };

        piece.has_moved = true;
        if let Some(kind) = mv.promotion {
            piece.kind = kind;
        }
        next.put(from, None);
        next.put(mv.to, Some(piece));
        next
    }
}
