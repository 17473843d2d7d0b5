use criterion::{criterion_group, criterion_main, Criterion};
use gridlight_core::grid::{Cell, GridMap};
use gridlight_core::renderer::ObjectBuffer;
use gridlight_core::scene::GlobalPrimitives;
use gridlight_core::PartitionSettings;
use gridlight_lanes::{pack, partition};
use std::hint::black_box;

/// A 32x32 grid of 3x3 rooms separated by walls with a door in every wall.
fn checkerboard_grid() -> GridMap {
    let size = 33;
    let rows = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    let wall_row = row % 4 == 0;
                    let wall_col = col % 4 == 0;
                    match (wall_row, wall_col) {
                        (true, true) => Cell::Wall(1),
                        (true, false) | (false, true) => {
                            let inner = if wall_row { col % 4 } else { row % 4 };
                            let on_border = row == 0 || col == 0 || row == size - 1 || col == size - 1;
                            if inner == 2 && !on_border {
                                Cell::Door
                            } else {
                                Cell::Wall(2)
                            }
                        }
                        (false, false) => Cell::Empty,
                    }
                })
                .collect()
        })
        .collect();
    GridMap::from_rows(rows).unwrap()
}

fn bench_level(c: &mut Criterion) {
    let grid = checkerboard_grid();
    let settings = PartitionSettings::default();

    let mut group = c.benchmark_group("Level Lane");
    group.bench_function("Partition 33x33 grid", |b| {
        b.iter(|| black_box(partition(&grid, &settings).unwrap()));
    });
    group.finish();

    let level = partition(&grid, &settings).unwrap();
    let global = GlobalPrimitives::default();
    let active: Vec<_> = level.rooms().iter().take(9).collect();
    let mut buffer = ObjectBuffer::new();

    let mut group = c.benchmark_group("Pack Lane");
    group.bench_function("Pack 9 active rooms", |b| {
        b.iter(|| black_box(pack(&mut buffer, &global, &active, level.doors()).unwrap()));
    });
    group.finish();
}

criterion_group!(benches, bench_level);
criterion_main!(benches);
