//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::prelude::*;

use crate::board::{Board, BoardBuilder, Color, MoveRecord, PieceKind, Square};
use crate::game::Game;

fn square_strategy() -> impl Strategy<Value = Square> {
    (0u8..64).prop_filter_map("on board", Square::from_index)
}

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn color_strategy() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::BOTH.to_vec())
}

const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// A slider, its square, a target at least two steps along one of its
/// lines, and a square strictly between the two.
fn blocked_line_strategy() -> impl Strategy<Value = (PieceKind, Square, Square, Square)> {
    (square_strategy(), 0..DIRECTIONS.len(), 2i8..8, any::<bool>())
        .prop_filter_map("target off board", |(from, dir, dist, queen)| {
            let (df, dr) = DIRECTIONS[dir];
            let to = from.offset(df * dist, dr * dist)?;
            let kind = match (queen, df == 0 || dr == 0) {
                (true, _) => PieceKind::Queen,
                (false, true) => PieceKind::Rook,
                (false, false) => PieceKind::Bishop,
            };
            Some((kind, from, to))
        })
        .prop_flat_map(|(kind, from, to)| {
            let between: Vec<Square> = crate::board::rays::between(from, to).iter().collect();
            (Just(kind), Just(from), Just(to), prop::sample::select(between))
        })
}

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Play `plies` random legal moves from the start position.
fn random_game(seed: u64, plies: usize) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();
    for _ in 0..plies {
        let moves = game.legal_moves();
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        if game.play(mv.from, mv.to).is_err() {
            break;
        }
    }
    game
}

/// The rule as written down for a piece alone on the board (pawns off their home rank).
fn lone_piece_rule(kind: PieceKind, color: Color, from: Square, to: Square) -> bool {
    let df = i16::from(to.file()) - i16::from(from.file());
    let dr = i16::from(to.rank()) - i16::from(from.rank());
    let forward = i16::from(color.pawn_direction());
    match kind {
        PieceKind::Pawn => {
            df == 0
                && (dr == forward
                    || (dr == 2 * forward && from.rank() == color.pawn_start_rank()))
        }
        PieceKind::Knight => (df.abs(), dr.abs()) == (1, 2) || (df.abs(), dr.abs()) == (2, 1),
        PieceKind::Bishop => df != 0 && df.abs() == dr.abs(),
        PieceKind::Rook => (df == 0) != (dr == 0),
        PieceKind::Queen => (df != 0 || dr != 0) && (df == 0 || dr == 0 || df.abs() == dr.abs()),
        PieceKind::King => df.abs().max(dr.abs()) == 1,
    }
}

proptest! {
    /// Property: on an otherwise empty board every piece follows its geometric rule
    #[test]
    fn prop_lone_piece_matches_geometry(
        kind in kind_strategy(),
        color in color_strategy(),
        from in square_strategy(),
        to in square_strategy(),
    ) {
        let board = BoardBuilder::new().piece(from, color, kind).build();
        prop_assert_eq!(
            board.is_pseudo_legal(from, to, None),
            lone_piece_rule(kind, color, from, to)
        );
    }

    /// Property: a blocker strictly between a slider and its target stops it
    #[test]
    fn prop_blocker_stops_sliders((kind, from, to, blocker) in blocked_line_strategy()) {
        let open = BoardBuilder::new().piece(from, Color::White, kind).build();
        prop_assert!(open.is_pseudo_legal(from, to, None));

        let board = BoardBuilder::new()
            .piece(from, Color::White, kind)
            .piece(blocker, Color::Black, PieceKind::Pawn)
            .build();
        prop_assert!(!board.is_pseudo_legal(from, to, None));
        prop_assert!(!board.is_path_clear(from, to));
        prop_assert!(board.is_path_clear(from, blocker));
    }

    /// Property: make_move followed by unmake_move restores board state exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in any::<u64>(), plies in move_count_strategy()) {
        let game = random_game(seed, plies);
        let mut board = game.board().clone();
        let turn = game.current_turn();
        let before = board.clone();

        for mv in board.clone().legal_moves(turn, game.last_move()) {
            let record = board.make_move(mv.from, mv.to).unwrap();
            prop_assert_ne!(&board, &before);
            board.unmake_move(record);
            prop_assert_eq!(&board, &before);
        }
    }

    /// Property: undoing a whole random game returns to the start
    #[test]
    fn prop_undo_all_returns_to_start(seed in any::<u64>(), plies in move_count_strategy()) {
        let mut game = random_game(seed, plies);
        let played = game.history().len();
        let mut undone = 0;
        while game.undo_move().is_some() {
            undone += 1;
        }
        prop_assert_eq!(undone, played);
        prop_assert_eq!(game.board(), &Board::new());
        prop_assert_eq!(game.current_turn(), Color::White);
    }

    /// Property: attacks on enemy-held squares agree with pseudo-legal captures
    #[test]
    fn prop_attacks_agree_with_captures(seed in any::<u64>(), plies in move_count_strategy()) {
        let game = random_game(seed, plies);
        let board = game.board();
        for attacker in Color::BOTH {
            for (target, _) in board.pieces(attacker.opponent()) {
                let by_rules = board
                    .pieces(attacker)
                    .any(|(from, _)| board.is_pseudo_legal(from, target, None));
                prop_assert_eq!(board.is_square_attacked(target, attacker), by_rules);
            }
        }
    }

    /// Property: the turn flips exactly when a move is accepted
    #[test]
    fn prop_turn_flips_only_on_success(
        seed in any::<u64>(),
        plies in move_count_strategy(),
        from in square_strategy(),
        to in square_strategy(),
    ) {
        let mut game = random_game(seed, plies);
        let turn = game.current_turn();
        let before = game.board().clone();
        let last: Option<MoveRecord> = game.last_move().copied();

        match game.play(from, to) {
            Ok(_) => prop_assert_eq!(game.current_turn(), turn.opponent()),
            Err(_) => {
                prop_assert_eq!(game.current_turn(), turn);
                prop_assert_eq!(game.board(), &before);
                prop_assert_eq!(game.last_move().copied(), last);
            }
        }
    }

    /// Property: no accepted move leaves the mover in check
    #[test]
    fn prop_legal_moves_are_legal(seed in any::<u64>(), plies in move_count_strategy()) {
        let mut game = random_game(seed, plies);
        let turn = game.current_turn();
        for mv in game.legal_moves() {
            let mut probe = game.clone();
            prop_assert!(probe.play(mv.from, mv.to).is_ok());
            prop_assert!(!probe.is_in_check(turn));
        }
    }
}
