//! Pseudo-legal move generation.
//!
//! Nothing here looks at king safety; see `legality.rs` for that.

use super::{Board, CandidateMove, Color, MoveMode, Piece, PieceKind, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const STRAIGHTS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Candidate moves for the piece on `from`, ignoring king safety.
    ///
    /// Returns an empty list for an empty square. In `MoveMode::Attack` the
    /// result is the set of squares the piece threatens.
    #[must_use]
    pub fn pseudo_moves(&self, from: Square, mode: MoveMode) -> Vec<CandidateMove> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };

        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece.color, mode),
            PieceKind::Knight => self.generate_step_moves(from, piece.color, &KNIGHT_OFFSETS),
            PieceKind::Bishop => self.generate_sliding_moves(from, piece.color, &DIAGONALS),
            PieceKind::Rook => self.generate_sliding_moves(from, piece.color, &STRAIGHTS),
            PieceKind::Queen => self.generate_sliding_moves(from, piece.color, &ALL_DIRECTIONS),
            PieceKind::King => self.generate_step_moves(from, piece.color, &KING_OFFSETS),
        }
    }

    fn generate_pawn_moves(&self, from: Square, color: Color, mode: MoveMode) -> Vec<CandidateMove> {
        let mut moves = Vec::new();
        let dir = color.pawn_direction();
        let promotion_row = color.pawn_promotion_row();
        let tag = |mv: CandidateMove| {
            if mv.to.row() == promotion_row {
                mv.promoting(PieceKind::Queen)
            } else {
                mv
            }
        };

        if mode == MoveMode::Normal {
            if let Some(one) = from.offset(dir, 0).filter(|sq| self.is_empty(*sq)) {
                moves.push(tag(CandidateMove::quiet(one)));

                if from.row() == color.pawn_start_row() {
                    if let Some(two) = from.offset(2 * dir, 0).filter(|sq| self.is_empty(*sq)) {
                        moves.push(tag(CandidateMove::quiet(two)));
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            let enemy = self
                .piece_at(target)
                .is_some_and(|other| other.color != color);
            if mode == MoveMode::Attack || enemy {
                moves.push(tag(CandidateMove::capture(target)));
            }
        }

        moves
    }

    /// Single-step movers: knight and king.
    fn generate_step_moves(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
    ) -> Vec<CandidateMove> {
        offsets
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .filter_map(|to| match self.piece_at(to) {
                None => Some(CandidateMove::quiet(to)),
                Some(other) if other.color != color => Some(CandidateMove::capture(to)),
                Some(_) => None,
            })
            .collect()
    }

    fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> Vec<CandidateMove> {
        let mut moves = Vec::new();
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                match self.piece_at(to) {
                    None => moves.push(CandidateMove::quiet(to)),
                    Some(Piece { color: other, .. }) => {
                        if other != color {
                            moves.push(CandidateMove::capture(to));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
        moves
    }
}
