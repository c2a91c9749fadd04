use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use spanning_mazes::{
    grid::Grid,
    union_find::DisjointSets,
    units::{SideLength, VertexId},
};

fn bench_grid_11(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(11);
    c.bench_function("grid_11", move |b| {
        b.iter(|| Grid::build(SideLength(11), 1000, &mut rng).unwrap())
    });
}

fn bench_grid_128(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(128);
    c.bench_function("grid_128", move |b| {
        b.iter(|| Grid::build(SideLength(128), 1000, &mut rng).unwrap())
    });
}

fn bench_grid_500(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(500);
    c.bench_function("grid_500", move |b| {
        b.iter(|| Grid::build(SideLength(500), 1000, &mut rng).unwrap())
    });
}

fn bench_neighbours_corner_of_grid(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(11);
    let g = Grid::build(SideLength(11), 1000, &mut rng).unwrap();
    c.bench_function("neighbours_corner_of_grid", move |b| {
        b.iter(|| g.neighbours(VertexId(0)))
    });
}

fn bench_neighbours_middle_of_grid(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(11);
    let g = Grid::build(SideLength(11), 1000, &mut rng).unwrap();
    c.bench_function("neighbours_middle_of_grid", move |b| {
        b.iter(|| g.neighbours(VertexId(60)))
    });
}

fn bench_union_find_chain(c: &mut Criterion) {
    c.bench_function("union_find_chain_10000", |b| {
        b.iter(|| {
            let mut sets = DisjointSets::new(10_000);
            for v in 1..10_000 {
                sets.union(VertexId(v - 1), VertexId(v));
            }
            sets.find(VertexId(0))
        })
    });
}

criterion_group!(
    benches,
    bench_grid_11,
    bench_grid_128,
    bench_grid_500,
    bench_neighbours_corner_of_grid,
    bench_neighbours_middle_of_grid,
    bench_union_find_chain
);
criterion_main!(benches);
