use super::{Board, Color, MoveMode, Square};

impl Board {
    /// Returns true if any piece of color `by` threatens `target`.
    ///
    /// There is no attack map; every piece of `by` is asked for its
    /// attack-mode moves.
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        self.pieces_of(by).any(|(from, _)| {
            self.pseudo_moves(from, MoveMode::Attack)
                .iter()
                .any(|mv| mv.to == target)
        })
    }

    /// Squares holding pieces of `by` that threaten `target`
    #[must_use]
    pub fn attackers_of(&self, target: Square, by: Color) -> Vec<Square> {
        self.pieces_of(by)
            .filter(|&(from, _)| {
                self.pseudo_moves(from, MoveMode::Attack)
                    .iter()
                    .any(|mv| mv.to == target)
            })
            .map(|(from, _)| from)
            .collect()
    }
}
