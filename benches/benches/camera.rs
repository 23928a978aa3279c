// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size, Vec2};
use overstory_camera::{CameraScene, InputEvent, PointerTarget, SceneConfig};
use understory_camera2d::{CameraConfig, CameraController, WorldBounds, clamp_position};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn point_in(&mut self, w: f64, h: f64) -> Point {
        Point::new(self.next_f64() * w, self.next_f64() * h)
    }
}

fn bench_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera/clamp_position");
    let world = WorldBounds::from_min_max(0.0, 0.0, 2000.0, 1500.0);
    let surface = Size::new(750.0, 1334.0);

    for n in [1_024usize, 16_384] {
        let mut rng = Lcg(0xC0FFEE);
        let points: Vec<Point> = (0..n).map(|_| rng.point_in(4000.0, 3000.0)).collect();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| {
                for &pt in points {
                    black_box(clamp_position(pt, &world, surface, 1.25));
                }
            });
        });
    }

    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera/update");
    let world = WorldBounds::from_min_max(0.0, 0.0, 2000.0, 1500.0);
    let surface = Size::new(800.0, 600.0);

    group.bench_function("follow", |b| {
        let mut cam = CameraController::new(world, surface, CameraConfig::default());
        let mut rng = Lcg(7);
        b.iter(|| {
            cam.update(1.0 / 60.0, rng.point_in(2000.0, 1500.0));
            black_box(cam.position());
        });
    });

    group.bench_function("animated_zoom_and_pan", |b| {
        b.iter_batched(
            || {
                let mut cam = CameraController::new(world, surface, CameraConfig::default());
                cam.set_focus(false);
                cam
            },
            |mut cam| {
                cam.zoom_out();
                cam.set_position(Point::new(1700.0, 200.0), true);
                for _ in 0..30 {
                    cam.update(1.0 / 60.0, Point::ZERO);
                }
                black_box(cam.presented_world_rect());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene");

    group.bench_function("drag_pan_frame", |b| {
        let mut scene = CameraScene::new(SceneConfig {
            surface: Size::new(800.0, 600.0),
            ..SceneConfig::default()
        });
        scene.handle(InputEvent::ToggleFocus);
        scene.handle(InputEvent::PointerDown {
            target: PointerTarget::Scene,
            pos: Point::new(400.0, 300.0),
        });
        let mut pos = Point::new(400.0, 300.0);
        let mut step = Vec2::new(3.0, 2.0);
        b.iter(|| {
            pos += step;
            if !(0.0..=800.0).contains(&pos.x) || !(0.0..=600.0).contains(&pos.y) {
                step = -step;
            }
            scene.handle(InputEvent::PointerMove {
                target: PointerTarget::Scene,
                pos,
            });
            scene.tick(1.0 / 60.0);
            black_box(scene.snapshot());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_clamp, bench_update, bench_scene);
criterion_main!(benches);
