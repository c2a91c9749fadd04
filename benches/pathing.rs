use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use spanning_mazes::maze::{Maze, MazeConfig};
use spanning_mazes::pathing;
use spanning_mazes::traversal::FrontierPolicy;

fn large_maze() -> Maze {
    Maze::generate(&MazeConfig::new(350, 250)).unwrap()
}

fn bench_breadth_first(c: &mut Criterion) {
    c.bench_function("breadth_first", |b| {
        let maze = large_maze();
        b.iter(|| maze.solve(FrontierPolicy::BreadthFirst).unwrap())
    });
}

fn bench_depth_first(c: &mut Criterion) {
    c.bench_function("depth_first", |b| {
        let maze = large_maze();
        b.iter(|| maze.solve(FrontierPolicy::depth_first()).unwrap())
    });
}

fn bench_reconstruct(c: &mut Criterion) {
    c.bench_function("reconstruct", |b| {
        let maze = large_maze();
        let mut traversal = maze.traverse(FrontierPolicy::BreadthFirst).unwrap();
        traversal.run().unwrap();
        let predecessors = traversal.completed_predecessors().unwrap().clone();
        b.iter(|| pathing::reconstruct(&predecessors, maze.start(), maze.goal()).unwrap())
    });
}

criterion_group!(benches,
    bench_breadth_first,
    bench_depth_first,
    bench_reconstruct
);
criterion_main!(benches);
