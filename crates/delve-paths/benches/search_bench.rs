//! A* search benchmarks: open rooms and a walled maze.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use delve_core::{Point, Range};
use delve_paths::{PathFinder, RoomFrame, SearchConfig, TerrainFn, TerrainSnapshot};

/// Vertical walls every fourth column, alternating a gap at the top and
/// bottom, so routes have to snake across the room.
fn maze_penalty(size: i32) -> impl Fn(Point) -> i32 {
    move |p: Point| {
        if p.x % 4 != 2 {
            return 1;
        }
        let gap_at_top = (p.x / 4) % 2 == 0;
        let gap = if gap_at_top { 0 } else { size - 1 };
        if p.y == gap { 1 } else { 0 }
    }
}

fn bench_open_room(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_room");
    for size in [16, 32, 64] {
        let bounds = Range::with_size(size, size);
        let frame = RoomFrame::new(Point::ZERO, bounds.size());
        let terrain = TerrainFn::new(|_| 1, |_| 1);
        let finder = PathFinder::default();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                finder.build_path(
                    bounds,
                    Point::new(0, 0),
                    black_box(Point::new(size - 1, size / 2)),
                    &terrain,
                    &frame,
                )
            })
        });
    }
    group.finish();
}

fn bench_maze(c: &mut Criterion) {
    let size = 48;
    let bounds = Range::with_size(size, size);
    let frame = RoomFrame::new(Point::ZERO, bounds.size());
    let terrain = TerrainFn::new(maze_penalty(size), |_| 1);

    let read_through = PathFinder::default();
    c.bench_function("maze_read_through", |b| {
        b.iter(|| {
            read_through.build_path(
                bounds,
                Point::new(0, 0),
                black_box(Point::new(size - 1, size - 1)),
                &terrain,
                &frame,
            )
        })
    });

    let copy_on_call =
        PathFinder::new(SearchConfig::default().with_snapshot(TerrainSnapshot::CopyOnCall));
    c.bench_function("maze_copy_on_call", |b| {
        b.iter(|| {
            copy_on_call.build_path(
                bounds,
                Point::new(0, 0),
                black_box(Point::new(size - 1, size - 1)),
                &terrain,
                &frame,
            )
        })
    });
}

criterion_group!(benches, bench_open_room, bench_maze);
criterion_main!(benches);
