use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pawn_storm::{Engine, Position, SearchConfig};

fn bench_search_start(c: &mut Criterion) {
    let pos = Position::default();
    let config = SearchConfig::default().with_max_depth(5).with_line_count(1);

    c.bench_function("search start depth 5", |b| {
        b.iter(|| {
            let mut engine = Engine::new(config.clone());
            black_box(engine.search(&pos))
        })
    });
}

fn bench_search_multi_line(c: &mut Criterion) {
    let pos = Position::from_fen("3q4/8/8/8/P7/8/1PPPPPPP/8 b").unwrap();
    let config = SearchConfig::default().with_max_depth(4).with_line_count(5);

    c.bench_function("search five lines depth 4", |b| {
        b.iter(|| {
            let mut engine = Engine::new(config.clone());
            black_box(engine.search(&pos))
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_search_start, bench_search_multi_line
}
criterion_main!(benches);
