use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tui_blockfall::core::{Board, Engine};
use tui_blockfall::types::{Command, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut engine = Engine::new(12345);

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            if engine.is_game_over() {
                engine.restart();
            }
            black_box(engine.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut board = Board::new();
    for y in 16..20 {
        for x in 0..10 {
            board.set(x, y, Some(PieceKind::I));
        }
    }

    c.bench_function("clear_4_lines", |b| {
        b.iter_batched(
            || board.clone(),
            |mut board| black_box(board.clear_full_lines()),
            BatchSize::SmallInput,
        )
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut engine = Engine::new(12345);

    c.bench_function("try_spawn", |b| {
        b.iter(|| black_box(engine.try_spawn()))
    });
}

fn bench_shift(c: &mut Criterion) {
    let mut engine = Engine::new(12345);

    c.bench_function("apply_move_right", |b| {
        b.iter(|| {
            if !engine.apply(black_box(Command::MoveRight)) {
                engine.apply(Command::MoveLeft);
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut engine = Engine::new(12345);
    engine.tick();

    c.bench_function("apply_rotate_cw", |b| {
        b.iter(|| black_box(engine.apply(Command::RotateCw)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_spawn,
    bench_shift,
    bench_rotate
);
criterion_main!(benches);
