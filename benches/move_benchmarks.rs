use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::hint::black_box;
use twenty48::core::{Direction, Grid, apply_move, slide_and_merge};
use twenty48::session::{GameSession, TurnReport};

const BOARDS: &[(&str, &str)] = &[
    ("sparse", r#"
    2 . . .
    . . 4 .
    . . . .
    . 2 . .
    "#),
    ("mergeable", r#"
    2 2 4 4
    8 8 16 16
    2 . 2 .
    4 4 4 4
    "#),
    ("stuck", r#"
    2 4 2 4
    4 2 4 2
    2 4 2 4
    4 2 4 2
    "#),
];

pub fn bench_slide_and_merge(c: &mut Criterion) {
    c.bench_function("slide_and_merge", |b| {
        b.iter(|| slide_and_merge(black_box([2, 2, 0, 4])))
    });
}

pub fn bench_apply_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_move");

    for &(board_name, board) in BOARDS {
        let grid: Grid = board.parse().unwrap();
        for direction in Direction::ALL {
            group.bench_with_input(
                BenchmarkId::new(direction.name(), board_name),
                &grid,
                |b, grid| b.iter(|| apply_move(black_box(grid), black_box(direction))),
            );
        }
    }
    group.finish();
}

pub fn bench_random_game(c: &mut Criterion) {
    c.bench_function("random_game_to_end", |b| {
        b.iter_with_setup(
            || GameSession::new(StdRng::seed_from_u64(2048), true),
            |mut session| {
                let mut moves = StdRng::seed_from_u64(7);
                loop {
                    let direction = *Direction::ALL.choose(&mut moves).unwrap();
                    if session.apply(direction) == TurnReport::Ignored && !session.keep_playing() {
                        break;
                    }
                }
                black_box(session.score())
            },
        );
    });
}

criterion_group!(
    move_benches,
    bench_slide_and_merge, bench_apply_move, bench_random_game
);
criterion_main!(move_benches);
