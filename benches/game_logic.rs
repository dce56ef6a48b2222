use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tui_2048::core::Board;
use tui_2048::engine::{Session, SessionConfig};
use tui_2048::types::Direction;

fn busy_board() -> Board {
    Board::from_rows(&[
        [2, 2, 4, 8],
        [0, 4, 4, 16],
        [2, 0, 0, 2],
        [128, 64, 64, 0],
    ])
    .unwrap()
}

fn bench_slide(c: &mut Criterion) {
    let board = busy_board();

    c.bench_function("slide_left_4x4", |b| {
        b.iter(|| black_box(&board).slide(black_box(Direction::Left)))
    });
    c.bench_function("slide_down_4x4", |b| {
        b.iter(|| black_box(&board).slide(black_box(Direction::Down)))
    });
}

fn bench_can_slide_at_all(c: &mut Criterion) {
    // Locked board: every direction is scanned to the end.
    let board = Board::from_rows(&[
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ])
    .unwrap();

    c.bench_function("can_slide_at_all_locked", |b| {
        b.iter(|| black_box(&board).can_slide_at_all())
    });
}

fn bench_place_random_tile(c: &mut Criterion) {
    let board = busy_board();
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("place_random_tile", |b| {
        b.iter(|| black_box(&board).place_random_tile(&mut rng))
    });
}

fn bench_session_step(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig::default()).unwrap();

    c.bench_function("session_step", |b| {
        b.iter(|| {
            if session.game_over() {
                session.restart().unwrap();
            }
            let direction = Direction::ALL
                .into_iter()
                .find(|&d| session.board().can_slide(d))
                .unwrap();
            session.step(black_box(direction)).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_slide,
    bench_can_slide_at_all,
    bench_place_random_tile,
    bench_session_step
);
criterion_main!(benches);
