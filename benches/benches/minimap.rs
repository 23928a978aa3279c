// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_camera2d::{
    CameraConfig, CameraController, MiniMapConfig, MiniMapProjector, SceneSnapshot, WorldBounds,
};

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimap/projection");
    let world = WorldBounds::from_min_max(0.0, 0.0, 2000.0, 1500.0);
    let map = MiniMapProjector::new(world, Size::new(150.0, 120.0));

    let n = 4_096usize;
    let points: Vec<Point> = (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            Point::new(t * 2000.0, (1.0 - t) * 1500.0)
        })
        .collect();
    group.throughput(Throughput::Elements(n as u64));

    group.bench_with_input(BenchmarkId::new("world_to_mini", n), &points, |b, points| {
        b.iter(|| {
            for &pt in points {
                black_box(map.world_to_mini(pt));
            }
        });
    });

    group.bench_with_input(BenchmarkId::new("mini_to_world", n), &points, |b, points| {
        b.iter(|| {
            for &pt in points {
                // Display points scaled down so some land in the letterbox band.
                black_box(map.mini_to_world(Point::new(pt.x * 0.08, pt.y * 0.08)));
            }
        });
    });

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimap/frame");
    let world = WorldBounds::from_min_max(0.0, 0.0, 2000.0, 1500.0);
    let mut cam = CameraController::new(world, Size::new(750.0, 1334.0), CameraConfig::default());
    cam.update(0.0, world.center());
    let snapshot = SceneSnapshot::capture(&cam, world.center());
    let config = MiniMapConfig::default();

    for display in [Size::new(150.0, 120.0), Size::new(600.0, 480.0)] {
        let map = MiniMapProjector::new(world, display);
        group.bench_with_input(
            BenchmarkId::new("frame_and_grid", display.width),
            &map,
            |b, map| {
                b.iter(|| {
                    black_box(map.frame(&snapshot, &config));
                    for line in map.grid_lines(config.grid_spacing) {
                        black_box(line);
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_projection, bench_frame);
criterion_main!(benches);
