use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use corners::board::{Grid, Player, ALL_POINTS};
use corners::geometry::find_squares;
use corners::protocol::cpn::parse_cpn;
use corners::resolve::{best_claim, sweep_final};
use corners::search::{choose_move, search};

const MIDGAME_CPN: &str = "bc/4,0/RR.b.r./RRrb.../..brb.r/.rb.br./b..r.../..b..r./r.....b";

/// A full board, red wherever `(row * 3 + col) % 5 < 2`.
fn full_grid() -> Grid {
    let mut grid = Grid::empty();
    for p in ALL_POINTS {
        let owner = if (p.row * 3 + p.col) % 5 < 2 {
            Player::Red
        } else {
            Player::Blue
        };
        grid.place(p, owner);
    }
    grid
}

fn bench_find_squares(c: &mut Criterion) {
    let grid = full_grid();
    c.bench_function("find_squares_full_board", |b| {
        b.iter(|| find_squares(black_box(Player::Blue), black_box(&grid)))
    });
}

fn bench_best_claim(c: &mut Criterion) {
    let state = parse_cpn(MIDGAME_CPN).unwrap();
    c.bench_function("best_claim_midgame", |b| {
        b.iter(|| best_claim(black_box(Player::Blue), black_box(&state.grid)))
    });
}

fn bench_choose_move(c: &mut Criterion) {
    let state = parse_cpn(MIDGAME_CPN).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    c.bench_function("choose_move_midgame", |b| {
        b.iter(|| choose_move(black_box(&state.grid), &mut rng))
    });
}

fn bench_search_empty(c: &mut Criterion) {
    let grid = Grid::empty();
    let mut rng = SmallRng::seed_from_u64(1);
    c.bench_function("search_empty_board", |b| {
        b.iter(|| search(black_box(Player::Red), black_box(&grid), &mut rng))
    });
}

fn bench_sweep(c: &mut Criterion) {
    let grid = full_grid();
    c.bench_function("sweep_final_full_board", |b| {
        b.iter(|| {
            let mut g = grid;
            let red = sweep_final(Player::Red, &mut g);
            let blue = sweep_final(Player::Blue, &mut g);
            black_box((red.points, blue.points))
        })
    });
}

criterion_group!(
    benches,
    bench_find_squares,
    bench_best_claim,
    bench_choose_move,
    bench_search_empty,
    bench_sweep,
);
criterion_main!(benches);
