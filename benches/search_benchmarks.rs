//! Benchmarks for the Connect Four engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use connect4::eval::evaluate_board;
use connect4::search::{order_moves, Searcher};
use connect4::{AIEngine, Board, Disc, GameMode};

fn middlegame() -> Board {
    Board::from_rows(&[
        ".......",
        ".......",
        "...O...",
        "..XX...",
        "..OXO..",
        ".XOXOX.",
    ])
    .unwrap()
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let empty = Board::new();
    group.bench_function("empty", |b| {
        b.iter(|| black_box(evaluate_board(&empty, Disc::Red)))
    });

    let board = middlegame();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(evaluate_board(&board, Disc::Blue)))
    });

    let mut ordered = middlegame();
    group.bench_function("order_moves", |b| {
        b.iter(|| black_box(order_moves(&mut ordered, Disc::Blue)))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(20);

    let board = middlegame();
    for depth in [2u8, 4, 6] {
        // Fresh cache each iteration so hits don't hide the tree
        group.bench_with_input(BenchmarkId::new("classic", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut searcher = Searcher::with_capacity(1_000_000);
                black_box(searcher.search(&board, Disc::Blue, depth, GameMode::Classic))
            })
        });
        group.bench_with_input(BenchmarkId::new("score_attack", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut searcher = Searcher::with_capacity(1_000_000);
                black_box(searcher.search(&board, Disc::Blue, depth, GameMode::ScoreAttack))
            })
        });
    }

    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.sample_size(20);

    let board = Board::new();
    group.bench_function("opening_medium", |b| {
        b.iter(|| {
            let mut engine = AIEngine::with_config(1_000_000);
            black_box(engine.get_move_with_stats(&board, Disc::Red, 4, GameMode::Classic))
        })
    });

    // Warm cache: repeated searches of the same position
    let mut warm = AIEngine::with_config(1_000_000);
    let position = middlegame();
    group.bench_function("warm_cache", |b| {
        b.iter(|| black_box(warm.choose_move(&position, Disc::Blue, 4, GameMode::Classic)))
    });

    group.finish();
}

criterion_group!(benches, bench_eval, bench_search, bench_engine);
criterion_main!(benches);
