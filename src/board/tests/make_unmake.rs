//! Make/unmake move tests.

use rand::prelude::*;

use super::sq;
use crate::board::{Board, BoardBuilder, Color, Move, MoveError, PieceKind};
use crate::game::Game;

#[test]
fn test_quiet_move_sets_has_moved_and_unmake_clears_it() {
    let mut board = Board::new();
    let record = board.make_move(sq("g1"), sq("f3")).unwrap();
    assert!(board.piece_at(sq("f3")).is_some_and(|p| p.has_moved));
    assert!(!record.piece.has_moved);

    board.unmake_move(record);
    assert_eq!(board, Board::new());
    assert!(board.piece_at(sq("g1")).is_some_and(|p| !p.has_moved));
}

#[test]
fn test_unmake_keeps_earlier_has_moved() {
    let mut board = Board::new();
    board.make_move(sq("g1"), sq("f3")).unwrap();
    let before = board.clone();

    let record = board.make_move(sq("f3"), sq("g5")).unwrap();
    assert!(record.piece.has_moved);
    board.unmake_move(record);
    assert_eq!(board, before);
    assert!(board.piece_at(sq("f3")).is_some_and(|p| p.has_moved));
}

#[test]
fn test_capture_make_unmake() {
    let original = BoardBuilder::new()
        .piece(sq("d1"), Color::White, PieceKind::Queen)
        .piece(sq("d7"), Color::Black, PieceKind::Knight)
        .build();
    let mut board = original.clone();

    let record = board.make_move(sq("d1"), sq("d7")).unwrap();
    assert_eq!(
        record.captured.map(|(square, piece)| (square, piece.kind)),
        Some((sq("d7"), PieceKind::Knight))
    );
    assert_eq!(board.pieces(Color::Black).count(), 0);

    board.unmake_move(record);
    assert_eq!(board, original);
}

#[test]
fn test_make_move_from_empty_square_fails() {
    let mut board = Board::new();
    assert_eq!(
        board.make_move(sq("e4"), sq("e5")),
        Err(MoveError::NoPiece { square: sq("e4") })
    );
    assert_eq!(board, Board::new());
}

#[test]
fn test_trial_restores_board() {
    let mut board = Board::new();
    let checked = board
        .trial(sq("e2"), sq("e4"), |b| b.is_empty(sq("e2")) && !b.is_empty(sq("e4")))
        .unwrap();
    assert!(checked);
    assert_eq!(board, Board::new());
}

#[test]
fn test_trial_of_every_legal_move_is_a_no_op() {
    let mut game = Game::new();
    for (from, to) in [("e2", "e4"), ("d7", "d5"), ("e4", "d5"), ("g8", "f6")] {
        assert!(game.play_move(from, to));
    }
    let mut board = game.board().clone();
    let before = board.clone();
    for Move { from, to } in board.legal_moves(Color::White, game.last_move()) {
        board.trial(from, to, |_| ()).unwrap();
        assert_eq!(board, before, "{from}{to}");
    }
}

#[test]
fn test_legal_moves_stable_after_make_unmake() {
    let mut board = Board::new();
    let initial = board.legal_moves(Color::White, None);

    for mv in &initial {
        let record = board.make_move(mv.from, mv.to).unwrap();
        board.unmake_move(record);
    }

    assert_eq!(board.legal_moves(Color::White, None), initial);
}

#[test]
fn test_random_playout_round_trip_state() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..4 {
        let mut game = Game::new();
        let mut positions = vec![game.board().clone()];

        for _ in 0..60 {
            let moves = game.legal_moves();
            let Some(mv) = moves.choose(&mut rng) else {
                break;
            };
            game.play(mv.from, mv.to).unwrap();
            positions.push(game.board().clone());
        }

        while game.undo_move().is_some() {
            positions.pop();
            assert_eq!(Some(game.board()), positions.last());
        }
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.current_turn(), Color::White);
    }
}
