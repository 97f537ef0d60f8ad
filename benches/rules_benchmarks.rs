//! Benchmarks for move validation and game-state queries.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{Board, Color, Square};
use chess_rules::{new_game, Game};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Italian game after 4...Nf6, a typical open middlegame.
fn middlegame() -> Game {
    let mut game = new_game();
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("g1", "f3"),
        ("b8", "c6"),
        ("f1", "c4"),
        ("f8", "c5"),
        ("d2", "d3"),
        ("g8", "f6"),
    ] {
        assert!(game.play_move(from, to));
    }
    game
}

fn fools_mate() -> Game {
    let mut game = new_game();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        assert!(game.play_move(from, to));
    }
    game
}

fn bench_pseudo_legal(c: &mut Criterion) {
    let mut group = c.benchmark_group("pseudo_legal");
    let board = Board::new();

    let cases = [
        ("knight", "g1", "f3"),
        ("pawn_double", "e2", "e4"),
        ("blocked_rook", "a1", "a5"),
        ("blocked_bishop", "c1", "g5"),
    ];
    for (name, from, to) in cases {
        let (from, to) = (sq(from), sq(to));
        group.bench_with_input(BenchmarkId::new("startpos", name), &(from, to), |b, &(f, t)| {
            b.iter(|| board.is_pseudo_legal(black_box(f), black_box(t), None))
        });
    }

    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    let mut startpos = new_game();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let mut middle = middlegame();
    group.bench_function("middlegame", |b| b.iter(|| black_box(middle.legal_moves())));

    group.finish();
}

fn bench_game_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("game_state");

    let board = middlegame().board().clone();
    group.bench_function("is_square_attacked", |b| {
        b.iter(|| board.is_square_attacked(black_box(sq("f7")), Color::White))
    });

    let mut mated = fools_mate();
    group.bench_function("is_checkmate", |b| {
        b.iter(|| black_box(mated.is_checkmate(Color::White)))
    });

    let mut middle = middlegame();
    group.bench_function("status_middlegame", |b| b.iter(|| black_box(middle.status())));

    group.bench_function("play_and_undo", |b| {
        let mut game = middlegame();
        b.iter(|| {
            let record = game.play(black_box(sq("e1")), black_box(sq("g1")));
            if record.is_ok() {
                game.undo_move();
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_pseudo_legal, bench_legal_moves, bench_game_state);
criterion_main!(benches);
