use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState};
use blockfall::engine::GameLoop;
use blockfall::types::ColorId;

fn bench_tick(c: &mut Criterion) {
    let mut game = GameLoop::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if game.on_tick(black_box(16)) == blockfall::engine::LoopControl::Stop {
                game.request_restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                board.fill_row(y, ColorId::Rose);
            }
            black_box(board.clear_completed_rows());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut dir = 1;

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            if !state.move_piece(black_box(dir)) {
                dir = -dir;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(state.rotate());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.restart();
            }
            black_box(state.hard_drop());
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = blockfall::core::GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_move,
    bench_rotate,
    bench_hard_drop,
    bench_snapshot
);
criterion_main!(benches);
