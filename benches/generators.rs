use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use spanning_mazes::{
    generators,
    grid::Grid,
    units::SideLength,
};

fn seeded_grid(side: usize) -> Grid {
    let mut rng = XorShiftRng::seed_from_u64(0xfeed);
    Grid::build(SideLength(side), 1000, &mut rng).unwrap()
}

fn bench_kruskal_maze_32(c: &mut Criterion) {
    let g = seeded_grid(32);
    c.bench_function("kruskal_maze_32", move |b| {
        b.iter(|| {
            let mut grid = g.clone();
            generators::randomized_kruskal(&mut grid).unwrap()
        })
    });
}

fn bench_kruskal_maze_128(c: &mut Criterion) {
    let g = seeded_grid(128);
    c.bench_function("kruskal_maze_128", move |b| {
        b.iter(|| {
            let mut grid = g.clone();
            generators::randomized_kruskal(&mut grid).unwrap()
        })
    });
}

fn bench_candidate_order_128(c: &mut Criterion) {
    let g = seeded_grid(128);
    c.bench_function("candidate_order_128", move |b| {
        b.iter(|| generators::candidate_order(g.edges()))
    });
}

criterion_group!(
    benches,
    bench_kruskal_maze_32,
    bench_kruskal_maze_128,
    bench_candidate_order_128
);
criterion_main!(benches);
