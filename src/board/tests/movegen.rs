//! Movement rule and legality filter tests.

use super::{board, destinations, sq};
use crate::board::{Board, CandidateMove, Color, MoveMode, PieceKind, Square};

#[test]
fn test_initial_position_layout() {
    let board = Board::new();
    assert_eq!(board.count(Color::White), 16);
    assert_eq!(board.count(Color::Black), 16);
    for col in 0..8 {
        let black_pawn = board.piece_at(Square(1, col)).unwrap();
        let white_pawn = board.piece_at(Square(6, col)).unwrap();
        assert_eq!((black_pawn.kind, black_pawn.color), (PieceKind::Pawn, Color::Black));
        assert_eq!((white_pawn.kind, white_pawn.color), (PieceKind::Pawn, Color::White));
    }
    assert_eq!(board.find_king(Color::Black), Some(Square(0, 4)));
    assert_eq!(board.find_king(Color::White), Some(Square(7, 4)));
    assert!(board.pieces().all(|(_, piece)| !piece.has_moved));
}

#[test]
fn test_initial_pawn_and_knight_moves() {
    let board = Board::new();
    let pawn = board.legal_moves(Square(6, 4), Color::White);
    assert_eq!(destinations(&pawn), vec![Square(4, 4), Square(5, 4)]);
    assert!(pawn.iter().all(|mv| !mv.capture && mv.promotion.is_none()));

    let knight = board.legal_moves(Square(7, 1), Color::White);
    assert_eq!(destinations(&knight), vec![sq("a3"), sq("c3")]);
    assert_eq!(knight.len(), 2);
}

#[test]
fn test_every_initial_legal_move_count() {
    let board = Board::new();
    assert_eq!(board.all_legal_moves(Color::White).len(), 20);
    assert_eq!(board.all_legal_moves(Color::Black).len(), 20);
}

#[test]
fn test_empty_and_enemy_squares_have_no_moves() {
    let board = Board::new();
    assert!(board.legal_moves(sq("e4"), Color::White).is_empty());
    assert!(board.legal_moves(sq("e7"), Color::White).is_empty());
    assert!(board.pseudo_moves(sq("e4"), MoveMode::Normal).is_empty());
}

#[test]
fn test_black_pawn_moves_down_the_board() {
    let board = Board::new();
    let moves = board.legal_moves(sq("d7"), Color::Black);
    assert_eq!(destinations(&moves), vec![sq("d6"), sq("d5")]);
}

#[test]
fn test_pawn_double_step_blocked() {
    // Knight on e3 blocks the double step but not the single one.
    let board = board("4k3/8/8/8/8/4n3/4P3/4K3");
    let moves = board.pseudo_moves(sq("e2"), MoveMode::Normal);
    assert!(moves.is_empty());

    let board = super::board("4k3/8/8/8/4n3/8/4P3/4K3");
    let moves = board.pseudo_moves(sq("e2"), MoveMode::Normal);
    assert_eq!(destinations(&moves), vec![sq("e3")]);
}

#[test]
fn test_pawn_double_step_only_from_start_row() {
    let board = board("4k3/8/8/8/8/4P3/8/4K3");
    let moves = board.pseudo_moves(sq("e3"), MoveMode::Normal);
    assert_eq!(destinations(&moves), vec![sq("e4")]);
}

#[test]
fn test_pawn_captures_only_enemies() {
    let board = board("4k3/8/8/3p1P2/4P3/8/8/4K3");
    let moves = board.pseudo_moves(sq("e4"), MoveMode::Normal);
    assert!(moves.contains(&CandidateMove::capture(sq("d5"))));
    assert!(!moves.iter().any(|mv| mv.to == sq("f5")));
    assert!(moves.contains(&CandidateMove::quiet(sq("e5"))));
    assert_eq!(moves.len(), 2);
}

#[test]
fn test_pawn_attack_mode() {
    let board = board("4k3/8/8/8/8/8/P3P3/4K3");
    let attacks = board.pseudo_moves(sq("e2"), MoveMode::Attack);
    assert_eq!(destinations(&attacks), vec![sq("d3"), sq("f3")]);
    assert!(attacks.iter().all(|mv| mv.capture));

    // Edge pawn threatens a single square.
    let attacks = board.pseudo_moves(sq("a2"), MoveMode::Attack);
    assert_eq!(destinations(&attacks), vec![sq("b3")]);
}

#[test]
fn test_knight_in_corner() {
    let board = board("4k3/8/8/8/8/8/2P5/N3K3");
    let moves = board.pseudo_moves(sq("a1"), MoveMode::Normal);
    assert_eq!(destinations(&moves), vec![sq("b3")]);
}

#[test]
fn test_knight_capture_flag() {
    let board = board("4k3/8/8/8/8/1p6/8/N3K3");
    let moves = board.pseudo_moves(sq("a1"), MoveMode::Normal);
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&CandidateMove::capture(sq("b3"))));
    assert!(moves.contains(&CandidateMove::quiet(sq("c2"))));
}

#[test]
fn test_rook_stops_at_first_enemy() {
    let board = board("4k3/8/8/8/8/8/8/R1p1K3");
    let moves = board.pseudo_moves(sq("a1"), MoveMode::Normal);
    let along_rank: Vec<_> = moves.iter().filter(|mv| mv.to.row() == 7).collect();
    assert_eq!(along_rank.len(), 2);
    assert!(moves.contains(&CandidateMove::quiet(sq("b1"))));
    assert!(moves.contains(&CandidateMove::capture(sq("c1"))));
    assert!(!moves.iter().any(|mv| mv.to == sq("d1")));
    // a2..a8 up the file, the last one empty too.
    assert_eq!(moves.len(), 2 + 7);
}

#[test]
fn test_slider_stops_before_friend() {
    let board = board("4k3/8/8/8/8/8/1P6/B3K3");
    let moves = board.pseudo_moves(sq("a1"), MoveMode::Normal);
    assert!(moves.is_empty());
}

#[test]
fn test_queen_center_count() {
    let board = board("4k3/8/8/8/3Q4/8/8/4K3");
    let moves = board.pseudo_moves(sq("d4"), MoveMode::Normal);
    assert_eq!(moves.len(), 27);
}

#[test]
fn test_bishop_center_count() {
    let board = board("4k3/8/8/8/3B4/8/8/4K3");
    let moves = board.pseudo_moves(sq("d4"), MoveMode::Normal);
    assert_eq!(moves.len(), 13);
}

#[test]
fn test_king_single_steps() {
    let board = board("4k3/8/8/8/8/8/8/4K3");
    let moves = board.pseudo_moves(sq("e1"), MoveMode::Normal);
    assert_eq!(moves.len(), 5);
    assert!(moves.iter().all(|mv| !mv.capture));
}

#[test]
fn test_no_castling() {
    let board = board("r3k2r/8/8/8/8/8/8/R3K2R");
    let moves = board.legal_moves(sq("e1"), Color::White);
    assert!(!moves.iter().any(|mv| mv.to == sq("g1") || mv.to == sq("c1")));
}

#[test]
fn test_pinned_piece_cannot_expose_king() {
    // The white knight on d1 shields the king from the rook on a1.
    let board = board("4k3/8/8/8/8/8/8/r2NK3");
    assert!(!board.pseudo_moves(sq("d1"), MoveMode::Normal).is_empty());
    assert!(board.legal_moves(sq("d1"), Color::White).is_empty());
}

#[test]
fn test_pinned_rook_slides_along_pin() {
    let board = board("4k3/8/8/8/8/8/8/r1R1K3");
    let moves = board.legal_moves(sq("c1"), Color::White);
    assert_eq!(destinations(&moves), vec![sq("a1"), sq("b1"), sq("d1")]);
}

#[test]
fn test_king_cannot_step_into_attack() {
    let board = board("4k3/8/8/8/8/8/r7/4K3");
    let moves = board.legal_moves(sq("e1"), Color::White);
    assert_eq!(destinations(&moves), vec![sq("d1"), sq("f1")]);
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    // The bishop on f3 defends the rook on e2.
    let board = board("4k3/8/8/8/8/5b2/4r3/4K3");
    let moves = board.legal_moves(sq("e1"), Color::White);
    assert_eq!(destinations(&moves), vec![sq("d1"), sq("f1")]);
}

#[test]
fn test_check_must_be_answered() {
    let board = board("4k3/4r3/8/8/8/8/P7/4K3");
    assert!(board.legal_moves(sq("a2"), Color::White).is_empty());
    assert!(!board.legal_moves(sq("e1"), Color::White).is_empty());
}

#[test]
fn test_legal_moves_without_king() {
    let board = board("4k3/8/8/8/8/8/8/R7");
    assert_eq!(board.legal_moves(sq("a1"), Color::White).len(), 14);
}
