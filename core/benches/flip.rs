use criterion::{Criterion, criterion_group, criterion_main};
use lights_out_core::*;
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let config = BoardConfig::new((64, 64), 0.25);
    c.bench_function("generate 64x64", |b| {
        b.iter(|| RandomBoardGenerator::new(black_box(42)).generate(config))
    });
}

fn bench_flip(c: &mut Criterion) {
    let board = RandomBoardGenerator::new(7).generate(BoardConfig::new((64, 64), 0.5));
    c.bench_function("flip_around 64x64", |b| {
        b.iter(|| black_box(&board).flip_around(black_box((31, 31))))
    });
    c.bench_function("has_won 64x64 dark", |b| {
        let dark = Board::unlit((64, 64));
        b.iter(|| black_box(&dark).has_won())
    });
}

criterion_group!(benches, bench_generate, bench_flip);
criterion_main!(benches);
