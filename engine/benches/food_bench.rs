use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::HashSet;
use std::hint::black_box;
use snake_engine::SessionRng;
use snake_engine::snake::{Food, FieldSize, Position};

fn occupied_except(field_size: &FieldSize, free: usize) -> HashSet<Position> {
    (0..field_size.height as i32)
        .flat_map(|y| (0..field_size.width as i32).map(move |x| Position::new(x, y)))
        .skip(free)
        .collect()
}

fn bench_respawn_sparse_board(c: &mut Criterion) {
    let field_size = FieldSize::new(32, 24);
    let avoid = occupied_except(&field_size, field_size.cell_count() - 3);
    let mut rng = SessionRng::new(1);
    let mut food = Food::at(Position::new(0, 0), field_size);

    c.bench_function("food_respawn_sparse_32x24", |b| {
        b.iter(|| black_box(food.respawn(black_box(&avoid), &mut rng)))
    });
}

fn bench_respawn_near_full_board(c: &mut Criterion) {
    let field_size = FieldSize::new(32, 24);
    let avoid = occupied_except(&field_size, 1);
    let mut rng = SessionRng::new(1);
    let mut food = Food::at(Position::new(0, 0), field_size);

    c.bench_function("food_respawn_one_free_cell_32x24", |b| {
        b.iter(|| black_box(food.respawn(black_box(&avoid), &mut rng)))
    });
}

criterion_group!(benches, bench_respawn_sparse_board, bench_respawn_near_full_board);
criterion_main!(benches);
