//! Game controller.
//!
//! `Game` is the state a front-end owns: the current board, whose turn it
//! is, the selected square and its legal moves, the move log and the
//! end-of-game flags. Rendering is left to the caller; everything here is
//! plain data driven by `select`, `click` and `play`.

use log::{debug, info};

use crate::board::{Board, CandidateMove, Color, GameStatus, MoveError, MoveRecord, Square};

const WELCOME: &str = "Select a piece to see its legal moves.";

/// A game in progress: board, turn, selection, move log and outcome.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    selected: Option<Square>,
    legal_moves: Vec<CandidateMove>,
    history: Vec<String>,
    last_move: Option<MoveRecord>,
    game_over: bool,
    outcome_title: String,
    message: String,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the starting position, White to move
    #[must_use]
    pub fn new() -> Self {
        Game::from_position(Board::new(), Color::White)
    }

    /// A game continuing from an arbitrary position.
    ///
    /// A position that is already checkmate or stalemate for `side_to_move`
    /// starts out finished.
    #[must_use]
    pub fn from_position(board: Board, side_to_move: Color) -> Self {
        let mut game = Game {
            board,
            side_to_move,
            selected: None,
            legal_moves: Vec::new(),
            history: Vec::new(),
            last_move: None,
            game_over: false,
            outcome_title: String::new(),
            message: WELCOME.to_string(),
        };
        game.settle_outcome();
        game
    }

    pub fn reset(&mut self) {
        debug!("resetting game");
        *self = Game::new();
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Legal moves of the selected piece, empty without a selection
    #[must_use]
    pub fn legal_moves(&self) -> &[CandidateMove] {
        &self.legal_moves
    }

    /// Descriptions of every move played so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// "White wins by checkmate", "Drawn game", or empty while playing
    #[must_use]
    pub fn outcome_title(&self) -> &str {
        &self.outcome_title
    }

    /// Status line for the last action
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Classification of the current position for the side to move
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.board.classify(self.side_to_move)
    }

    /// Turn indicator: "White to move", "Black to move — check", or the
    /// outcome title once the game is over.
    #[must_use]
    pub fn turn_text(&self) -> String {
        if self.game_over {
            return self.outcome_title.clone();
        }
        if self.board.is_in_check(self.side_to_move) {
            format!("{} to move — check", self.side_to_move)
        } else {
            format!("{} to move", self.side_to_move)
        }
    }

    /// Select the piece on `square`.
    ///
    /// Selecting the already selected square, an empty square or an enemy
    /// piece clears the selection. Does nothing once the game is over.
    pub fn select(&mut self, square: Square) {
        if self.game_over {
            return;
        }
        match self.board.piece_at(square) {
            Some(piece) if piece.color == self.side_to_move && self.selected != Some(square) => {
                self.legal_moves = self.board.legal_moves(square, self.side_to_move);
                self.selected = Some(square);
                debug!(
                    "selected {} on {} with {} legal moves",
                    piece,
                    square,
                    self.legal_moves.len()
                );
                self.message = if self.legal_moves.is_empty() {
                    format!("No legal moves for the {piece}.")
                } else {
                    format!("{} {} on {} ready.", piece.color, piece.kind, square)
                };
            }
            _ => self.clear_selection(),
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.legal_moves.clear();
        self.message = format!("{} to move.", self.side_to_move);
    }

    /// Handle a click on `square`.
    ///
    /// With a selection, clicking one of its legal destinations plays that
    /// move and returns its record; any other click changes the selection.
    pub fn click(&mut self, square: Square) -> Option<MoveRecord> {
        if self.game_over {
            return None;
        }
        let chosen = self.legal_moves.iter().find(|mv| mv.to == square).copied();
        match (self.selected, chosen) {
            (Some(from), Some(mv)) => self.execute(from, &mv),
            _ => {
                self.select(square);
                None
            }
        }
    }

    /// Play the piece on `from` to `to`, validating against the legal moves.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPiece { square: from })?;
        if piece.color != self.side_to_move {
            return Err(MoveError::WrongColor {
                square: from,
                to_move: self.side_to_move,
            });
        }
        let mv = self
            .board
            .legal_moves(from, self.side_to_move)
            .into_iter()
            .find(|mv| mv.to == to)
            .ok_or(MoveError::IllegalMove { from, to })?;
        self.execute(from, &mv).ok_or(MoveError::NoPiece { square: from })
    }

    /// Play a move written as two squares, e.g. "e2e4", "e2 e4" or "e2-e4".
    pub fn play_str(&mut self, text: &str) -> Result<MoveRecord, MoveError> {
        let (from, to) = parse_move(text)?;
        self.play(from, to)
    }

    fn execute(&mut self, from: Square, mv: &CandidateMove) -> Option<MoveRecord> {
        let next = self.board.apply_move(from, mv);
        let record = MoveRecord::new(&self.board, from, mv, &next)?;
        let description = record.to_string();
        debug!("move {}: {}", self.history.len() + 1, description);

        self.board = next;
        self.side_to_move = record.color.opponent();
        self.selected = None;
        self.legal_moves.clear();
        self.history.push(description);
        self.last_move = Some(record);

        if self.settle_outcome() == GameStatus::Ongoing {
            self.message = if record.check {
                format!("{} is in check.", self.side_to_move)
            } else {
                format!("{} to move.", self.side_to_move)
            };
        }

        Some(record)
    }

    /// Classify the position for the side to move and end the game on
    /// checkmate or stalemate.
    fn settle_outcome(&mut self) -> GameStatus {
        let status = self.board.classify(self.side_to_move);
        let loser = self.side_to_move;
        let winner = loser.opponent();
        match status {
            GameStatus::Checkmate => {
                self.game_over = true;
                self.outcome_title = format!("{winner} wins by checkmate");
                self.message = format!("Checkmate! {winner} defeats {loser}.");
                info!("{}", self.outcome_title);
            }
            GameStatus::Stalemate => {
                self.game_over = true;
                self.outcome_title = "Drawn game".to_string();
                self.message = "Stalemate! No legal moves remain.".to_string();
                info!("stalemate after {} moves", self.history.len());
            }
            GameStatus::Ongoing => {}
        }
        status
    }
}

/// Parse a move written as two squares. Separators between them are ignored.
pub fn parse_move(text: &str) -> Result<(Square, Square), MoveError> {
    let compact: String = text.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    if compact.len() != 4 {
        return Err(MoveError::InvalidNotation {
            notation: text.to_string(),
        });
    }
    let from = compact[..2].parse::<Square>()?;
    let to = compact[2..].parse::<Square>()?;
    Ok((from, to))
}

/// Accessibility label for a square, e.g. "Empty square e4" or
/// "White knight on g1".
#[must_use]
pub fn square_label(board: &Board, square: Square) -> String {
    match board.piece_at(square) {
        None => format!("Empty square {square}"),
        Some(piece) => format!("{} {} on {}", piece.color, piece.kind, square),
    }
}
